//! Display mapping for order status codes.

/// Color and label for a status code.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusPresentation {
    pub color: &'static str,
    pub label: String,
}

/// Maps a status code to its display color and label. Unrecognized codes
/// pass through as the label with a neutral color; never fails.
pub fn status_presentation(status: &str) -> StatusPresentation {
    let (color, label) = match status {
        "Pending" => ("#FFC107", "Pending"),
        "Dispatched" => ("#4CAF50", "Dispatched"),
        "Cancelled" => ("#F44336", "Cancelled"),
        other => ("#000", other),
    };
    StatusPresentation {
        color,
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_get_their_colors() {
        assert_eq!(
            status_presentation("Pending"),
            StatusPresentation {
                color: "#FFC107",
                label: "Pending".into()
            }
        );
        assert_eq!(status_presentation("Dispatched").color, "#4CAF50");
        assert_eq!(status_presentation("Cancelled").color, "#F44336");
    }

    #[test]
    fn unknown_status_passes_through_with_neutral_color() {
        let p = status_presentation("Unknown");
        assert_eq!(p.label, "Unknown");
        assert_eq!(p.color, "#000");
    }

    #[test]
    fn empty_status_does_not_fail() {
        let p = status_presentation("");
        assert_eq!(p.label, "");
        assert_eq!(p.color, "#000");
    }
}
