/// Last value reached by a prediction run's progress indicator.
pub const PROGRESS_MAX: u8 = 100;

/// Explicit step counter for the cosmetic "model run" progress indicator.
///
/// Yields every value from 0 to [`PROGRESS_MAX`] inclusive, once. Pacing is left to whoever consumes the frames.
#[derive(Debug, Clone)]
pub struct ProgressCounter {
    next: Option<u8>,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self { next: Some(0) }
    }

    pub fn is_complete(&self) -> bool {
        self.next.is_none()
    }
}

impl Default for ProgressCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ProgressCounter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let current = self.next?;
        self.next = (current < PROGRESS_MAX).then_some(current + 1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| usize::from(PROGRESS_MAX - next) + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProgressCounter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_zero_to_hundred() {
        let steps: Vec<u8> = ProgressCounter::new().collect();

        assert_eq!(steps.len(), 101);
        assert_eq!(steps.first(), Some(&0));
        assert_eq!(steps.last(), Some(&PROGRESS_MAX));
        assert!(steps.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    #[test]
    fn test_completes_after_last_step() {
        let mut counter = ProgressCounter::new();
        assert_eq!(counter.len(), 101);

        counter.by_ref().take(100).for_each(drop);
        assert!(!counter.is_complete());
        assert_eq!(counter.next(), Some(100));
        assert!(counter.is_complete());
        assert_eq!(counter.next(), None);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut first = ProgressCounter::new();
        first.by_ref().for_each(drop);

        assert!(first.is_complete());
        assert_eq!(ProgressCounter::default().next(), Some(0));
    }
}
