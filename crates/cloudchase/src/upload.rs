use std::path::Path;

/// Name of the form field carrying the uploaded cloud image.
pub const UPLOAD_FIELD: &str = "cloud_image";

/// Extensions accepted by the upload control.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// State of the upload control for a single render.
///
/// Only the presence and name of the file matter: the uploaded bytes are never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Upload {
    #[default]
    Missing,
    Accepted { file_name: String },
    Rejected { file_name: String },
}

impl Upload {
    /// Classifies a submitted file by name. Browsers submit an empty name when no file was chosen.
    pub fn from_file_name(file_name: Option<&str>) -> Self {
        let Some(file_name) = file_name.map(str::trim).filter(|name| !name.is_empty()) else {
            return Upload::Missing;
        };

        let accepted = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ACCEPTED_EXTENSIONS
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            });

        let file_name = file_name.to_string();
        if accepted {
            Upload::Accepted { file_name }
        } else {
            Upload::Rejected { file_name }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Upload::Accepted { .. })
    }

    /// Value for the `accept` attribute of the file input.
    pub fn accept_attribute() -> String {
        ACCEPTED_EXTENSIONS
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_is_missing() {
        assert_eq!(Upload::from_file_name(None), Upload::Missing);
        assert_eq!(Upload::from_file_name(Some("")), Upload::Missing);
        assert_eq!(Upload::from_file_name(Some("   ")), Upload::Missing);
    }

    #[test]
    fn test_image_extensions_are_accepted() {
        assert!(Upload::from_file_name(Some("frame.png")).is_accepted());
        assert!(Upload::from_file_name(Some("frame.JPEG")).is_accepted());
        assert!(Upload::from_file_name(Some("insat 3dr.jpg")).is_accepted());
    }

    #[test]
    fn test_other_files_are_rejected() {
        assert_eq!(
            Upload::from_file_name(Some("notes.txt")),
            Upload::Rejected {
                file_name: "notes.txt".to_string()
            }
        );
        assert!(!Upload::from_file_name(Some("png")).is_accepted());
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(Upload::accept_attribute(), ".png,.jpg,.jpeg");
    }
}
