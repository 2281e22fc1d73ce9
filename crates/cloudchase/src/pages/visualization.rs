use maud::html;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::DashboardError;
use crate::page::{PageContext, View};
use crate::templating::charts::Heatmap;

const GRID_SIZE: usize = 10;
const HEATMAP_SEED: u64 = 42;

/// Cloud density grid shown on the page. Pseudo-random, but seeded, so every render shows the same picture.
pub fn density_grid() -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(HEATMAP_SEED);

    (0..GRID_SIZE)
        .map(|_| (0..GRID_SIZE).map(|_| rng.random_range(0.0..1.0)).collect())
        .collect()
}

pub fn render(_ctx: &mut PageContext<'_>) -> Result<View, DashboardError> {
    let grid = density_grid();
    let mut view = View::new();

    view.push(html! {
        h1 { "Visualization" }
        p {
            "Simulated cloud density over a " (GRID_SIZE) "×" (GRID_SIZE)
            " tile of the observation area. Darker cells stand for denser cloud cover."
        }
        (Heatmap {
            id: "density-heatmap",
            title: "Cloud Density Heatmap",
            cells: &grid,
        })
    });

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DashboardOptions;
    use crate::upload::Upload;

    #[test]
    fn test_grid_is_fixed_across_renders() {
        let first = density_grid();

        assert_eq!(first, density_grid());
        assert_eq!(first.len(), GRID_SIZE);
        assert!(first.iter().flatten().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_page_does_not_depend_on_context_rng() {
        let options = DashboardOptions::default();
        let a = render(&mut PageContext::with_seed(&options, Upload::Missing, 1)).unwrap();
        let b = render(&mut PageContext::with_seed(&options, Upload::Missing, 2)).unwrap();

        let a = a.into_string();
        assert_eq!(a, b.into_string());
        assert_eq!(a.matches("<rect").count(), GRID_SIZE * GRID_SIZE);
    }
}
