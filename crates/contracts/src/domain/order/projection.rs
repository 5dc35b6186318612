//! Projection of a measurement record into flat, labelled display fields.
//!
//! Every section is computed independently and a missing intermediate object
//! yields an empty section, never an error. A numeric field is emitted iff it
//! is present — a genuine zero measurement is kept. A text field is emitted
//! iff it is present and non-blank.

use super::aggregate::{Product, StretchData};

/// One labelled, unit-annotated display entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

/// Renders a measurement without a trailing `.0` for whole numbers.
pub fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn push_measure(out: &mut Vec<DisplayField>, label: &'static str, value: Option<f64>, unit: &'static str) {
    if let Some(v) = value {
        out.push(DisplayField {
            label,
            value: format_measure(v),
            unit: Some(unit),
        });
    }
}

fn push_text(out: &mut Vec<DisplayField>, label: &'static str, value: Option<&String>) {
    if let Some(v) = value {
        let v = v.trim();
        if !v.is_empty() {
            out.push(DisplayField {
                label,
                value: v.to_string(),
                unit: None,
            });
        }
    }
}

/// Kameez (top-garment) section, all entries in inches.
pub fn kameez_section(record: Option<&StretchData>) -> Vec<DisplayField> {
    let mut out = Vec::new();
    let Some(k) = record.and_then(|r| r.kameez.as_ref()) else {
        return out;
    };
    push_measure(&mut out, "Armhole Circumference", k.armhole_circumference, "inches");
    push_measure(&mut out, "Bicep Circumference", k.bicep_circumference, "inches");
    push_measure(&mut out, "Bust Circumference", k.bust_circumference, "inches");
    push_measure(&mut out, "Front Neck Depth", k.front_neck_depth, "inches");
    push_measure(&mut out, "Hip Circumference", k.hip_circumference, "inches");
    push_measure(&mut out, "Kameez Length", k.kameez_length, "inches");
    push_measure(&mut out, "Neck Circumference", k.neck_circumference, "inches");
    push_measure(&mut out, "Shoulder to Waist Length", k.shoulder_to_waist_length, "inches");
    push_measure(&mut out, "Shoulder Width", k.shoulder_width, "inches");
    push_measure(&mut out, "Sleeve Length", k.sleeve_length, "inches");
    push_measure(&mut out, "Sleeve Opening Circumference", k.sleeve_opening_circumference, "inches");
    push_measure(&mut out, "Waist Circumference", k.waist_circumference, "inches");
    out
}

/// Shalwar (bottom-garment) section, all entries in inches.
pub fn shalwar_section(record: Option<&StretchData>) -> Vec<DisplayField> {
    let mut out = Vec::new();
    let Some(s) = record.and_then(|r| r.shalwar.as_ref()) else {
        return out;
    };
    push_measure(&mut out, "Ankle Opening", s.ankle_opening, "inches");
    push_measure(&mut out, "Crotch Depth", s.crotch_depth, "inches");
    push_measure(&mut out, "Hip Circumference", s.hip_circumference, "inches");
    push_measure(&mut out, "Inseam Length", s.inseam_length, "inches");
    push_measure(&mut out, "Outseam Length", s.outseam_length, "inches");
    push_measure(&mut out, "Rise", s.rise, "inches");
    push_measure(&mut out, "Thigh Circumference", s.thigh_circumference, "inches");
    push_measure(&mut out, "Waist Circumference", s.waist_circumference, "inches");
    out
}

/// Height and weight.
pub fn body_metrics_section(record: Option<&StretchData>) -> Vec<DisplayField> {
    let mut out = Vec::new();
    let Some(r) = record else {
        return out;
    };
    push_measure(&mut out, "Height", r.height, "cm");
    push_measure(&mut out, "Weight", r.weight, "kg");
    out
}

/// Fit-preference blocks, one per product × measurement-record pair that
/// carries preferences. Unlike the other sections this fans out over the full
/// product list, not just the first product's first record.
pub fn fit_preference_sections(products: &[Product]) -> Vec<Vec<DisplayField>> {
    let mut blocks = Vec::new();
    for product in products {
        for record in &product.stretch_data {
            let Some(prefs) = record.fit_preferences.as_ref() else {
                continue;
            };
            let mut out = Vec::new();
            push_text(&mut out, "Kameez Fit", prefs.kameez_fit.as_ref());
            push_text(&mut out, "Neckline Style", prefs.neckline_style.as_ref());
            push_text(&mut out, "Pant Style", prefs.pant_style.as_ref());
            push_text(&mut out, "Sleeve Style", prefs.sleeve_style.as_ref());
            blocks.push(out);
        }
    }
    blocks
}

/// Stitching-reference image attached to the record, if any.
pub fn stitch_image(record: Option<&StretchData>) -> Option<&str> {
    record.and_then(|r| r.stitch_image.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::aggregate::{FitPreferences, KameezMeasurements, ShalwarMeasurements};

    #[test]
    fn absent_record_yields_empty_sections() {
        assert!(kameez_section(None).is_empty());
        assert!(shalwar_section(None).is_empty());
        assert!(body_metrics_section(None).is_empty());
        assert!(fit_preference_sections(&[]).is_empty());
        assert_eq!(stitch_image(None), None);
    }

    #[test]
    fn all_absent_record_yields_empty_sections() {
        let record = StretchData::default();
        assert!(kameez_section(Some(&record)).is_empty());
        assert!(shalwar_section(Some(&record)).is_empty());
        assert!(body_metrics_section(Some(&record)).is_empty());
    }

    #[test]
    fn single_bust_measurement_projects_one_entry() {
        let record = StretchData {
            kameez: Some(KameezMeasurements {
                bust_circumference: Some(36.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let kameez = kameez_section(Some(&record));
        assert_eq!(
            kameez,
            vec![DisplayField {
                label: "Bust Circumference",
                value: "36".to_string(),
                unit: Some("inches"),
            }]
        );
        assert!(shalwar_section(Some(&record)).is_empty());
        assert!(body_metrics_section(Some(&record)).is_empty());
    }

    #[test]
    fn zero_measurement_is_still_shown() {
        let record = StretchData {
            shalwar: Some(ShalwarMeasurements {
                rise: Some(0.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let shalwar = shalwar_section(Some(&record));
        assert_eq!(shalwar.len(), 1);
        assert_eq!(shalwar[0].label, "Rise");
        assert_eq!(shalwar[0].value, "0");
    }

    #[test]
    fn fractional_measurements_keep_their_fraction() {
        let record = StretchData {
            kameez: Some(KameezMeasurements {
                sleeve_length: Some(22.5),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(kameez_section(Some(&record))[0].value, "22.5");
    }

    #[test]
    fn sections_keep_enumeration_order() {
        let record = StretchData {
            kameez: Some(KameezMeasurements {
                waist_circumference: Some(30.0),
                armhole_circumference: Some(16.0),
                neck_circumference: Some(14.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let labels: Vec<&str> = kameez_section(Some(&record)).iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Armhole Circumference", "Neck Circumference", "Waist Circumference"]
        );
    }

    #[test]
    fn body_metrics_carry_their_units() {
        let record = StretchData {
            height: Some(162.0),
            weight: Some(55.5),
            ..Default::default()
        };

        let metrics = body_metrics_section(Some(&record));
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].label, "Height");
        assert_eq!(metrics[0].unit, Some("cm"));
        assert_eq!(metrics[1].label, "Weight");
        assert_eq!(metrics[1].unit, Some("kg"));
        assert_eq!(metrics[1].value, "55.5");
    }

    #[test]
    fn fit_preferences_fan_out_per_product_record_pair() {
        let prefs = |fit: &str| FitPreferences {
            kameez_fit: Some(fit.to_string()),
            ..Default::default()
        };
        let products = vec![
            Product {
                stretch_data: vec![
                    StretchData {
                        fit_preferences: Some(prefs("Slim")),
                        ..Default::default()
                    },
                    StretchData::default(),
                ],
                ..Default::default()
            },
            Product {
                stretch_data: vec![StretchData {
                    fit_preferences: Some(prefs("Loose")),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ];

        let blocks = fit_preference_sections(&products);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0].value, "Slim");
        assert_eq!(blocks[1][0].value, "Loose");
        assert_eq!(blocks[0][0].unit, None);
    }

    #[test]
    fn blank_fit_preference_values_are_dropped() {
        let products = vec![Product {
            stretch_data: vec![StretchData {
                fit_preferences: Some(FitPreferences {
                    kameez_fit: Some("  ".to_string()),
                    pant_style: Some("Straight".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            ..Default::default()
        }];

        let blocks = fit_preference_sections(&products);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 1);
        assert_eq!(blocks[0][0].label, "Pant Style");
    }
}
