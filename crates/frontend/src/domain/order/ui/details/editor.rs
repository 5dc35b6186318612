//! Measurement editor shown in the edit modal.
//!
//! Works on a local copy of the draft; the controller only ever sees the
//! record handed back through `on_save`.

use crate::shared::icons::icon;
use contracts::domain::order::projection::format_measure;
use contracts::domain::order::{FitPreferences, KameezMeasurements, ShalwarMeasurements, StretchData};
use leptos::prelude::*;
use thaw::*;

fn parse_measure(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

/// Labelled text input holding its own text state so typing is never blocked
/// by the draft's parsed representation.
#[component]
fn FieldInput(
    id: &'static str,
    label: &'static str,
    unit: Option<&'static str>,
    initial: String,
    on_change: Callback<String>,
) -> impl IntoView {
    let (text, set_text) = signal(initial);

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_text.set(value.clone());
        on_change.run(value);
    };

    view! {
        <div class="form-group">
            <label for=id>
                {label}
                {unit.map(|u| format!(" ({})", u))}
            </label>
            <input type="text" id=id prop:value=move || text.get() on:input=on_input />
        </div>
    }
}

fn kameez_input(
    draft: RwSignal<StretchData>,
    id: &'static str,
    label: &'static str,
    get: fn(&KameezMeasurements) -> Option<f64>,
    set: fn(&mut KameezMeasurements, Option<f64>),
) -> impl IntoView {
    let initial = draft
        .with_untracked(|d| d.kameez.as_ref().and_then(get))
        .map(format_measure)
        .unwrap_or_default();

    view! {
        <FieldInput
            id=id
            label=label
            unit=Some("inches")
            initial=initial
            on_change=Callback::new(move |text: String| {
                draft.update(|d| {
                    set(d.kameez.get_or_insert_with(Default::default), parse_measure(&text))
                });
            })
        />
    }
}

fn shalwar_input(
    draft: RwSignal<StretchData>,
    id: &'static str,
    label: &'static str,
    get: fn(&ShalwarMeasurements) -> Option<f64>,
    set: fn(&mut ShalwarMeasurements, Option<f64>),
) -> impl IntoView {
    let initial = draft
        .with_untracked(|d| d.shalwar.as_ref().and_then(get))
        .map(format_measure)
        .unwrap_or_default();

    view! {
        <FieldInput
            id=id
            label=label
            unit=Some("inches")
            initial=initial
            on_change=Callback::new(move |text: String| {
                draft.update(|d| {
                    set(d.shalwar.get_or_insert_with(Default::default), parse_measure(&text))
                });
            })
        />
    }
}

fn fit_input(
    draft: RwSignal<StretchData>,
    id: &'static str,
    label: &'static str,
    get: fn(&FitPreferences) -> Option<&String>,
    set: fn(&mut FitPreferences, Option<String>),
) -> impl IntoView {
    let initial = draft
        .with_untracked(|d| d.fit_preferences.as_ref().and_then(get).cloned())
        .unwrap_or_default();

    view! {
        <FieldInput
            id=id
            label=label
            unit=None
            initial=initial
            on_change=Callback::new(move |text: String| {
                let value = if text.trim().is_empty() { None } else { Some(text) };
                draft.update(|d| {
                    set(d.fit_preferences.get_or_insert_with(Default::default), value.clone())
                });
            })
        />
    }
}

fn metric_input(
    draft: RwSignal<StretchData>,
    id: &'static str,
    label: &'static str,
    unit: &'static str,
    get: fn(&StretchData) -> Option<f64>,
    set: fn(&mut StretchData, Option<f64>),
) -> impl IntoView {
    let initial = draft
        .with_untracked(|d| get(d))
        .map(format_measure)
        .unwrap_or_default();

    view! {
        <FieldInput
            id=id
            label=label
            unit=Some(unit)
            initial=initial
            on_change=Callback::new(move |text: String| {
                draft.update(|d| set(d, parse_measure(&text)));
            })
        />
    }
}

#[component]
pub fn MeasurementEditor(
    initial: StretchData,
    submitting: bool,
    error: Option<String>,
    on_save: Callback<StretchData>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(initial);

    view! {
        <div class="editor">
            <div class="editor__header">
                <h3>"Edit Stitching Data"</h3>
                <button
                    class="button button--icon"
                    aria-label="Close"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                </button>
            </div>

            {error.map(|message| view! { <div class="error-box">{message}</div> })}

            <div class="editor__body">
                <h4>"Kameez Measurements"</h4>
                <div class="editor__grid">
                    {kameez_input(draft, "armhole-circumference", "Armhole Circumference", |k| k.armhole_circumference, |k, v| k.armhole_circumference = v)}
                    {kameez_input(draft, "bicep-circumference", "Bicep Circumference", |k| k.bicep_circumference, |k, v| k.bicep_circumference = v)}
                    {kameez_input(draft, "bust-circumference", "Bust Circumference", |k| k.bust_circumference, |k, v| k.bust_circumference = v)}
                    {kameez_input(draft, "front-neck-depth", "Front Neck Depth", |k| k.front_neck_depth, |k, v| k.front_neck_depth = v)}
                    {kameez_input(draft, "kameez-hip-circumference", "Hip Circumference", |k| k.hip_circumference, |k, v| k.hip_circumference = v)}
                    {kameez_input(draft, "kameez-length", "Kameez Length", |k| k.kameez_length, |k, v| k.kameez_length = v)}
                    {kameez_input(draft, "neck-circumference", "Neck Circumference", |k| k.neck_circumference, |k, v| k.neck_circumference = v)}
                    {kameez_input(draft, "shoulder-to-waist-length", "Shoulder to Waist Length", |k| k.shoulder_to_waist_length, |k, v| k.shoulder_to_waist_length = v)}
                    {kameez_input(draft, "shoulder-width", "Shoulder Width", |k| k.shoulder_width, |k, v| k.shoulder_width = v)}
                    {kameez_input(draft, "sleeve-length", "Sleeve Length", |k| k.sleeve_length, |k, v| k.sleeve_length = v)}
                    {kameez_input(draft, "sleeve-opening-circumference", "Sleeve Opening Circumference", |k| k.sleeve_opening_circumference, |k, v| k.sleeve_opening_circumference = v)}
                    {kameez_input(draft, "kameez-waist-circumference", "Waist Circumference", |k| k.waist_circumference, |k, v| k.waist_circumference = v)}
                </div>

                <h4>"Shalwar Measurements"</h4>
                <div class="editor__grid">
                    {shalwar_input(draft, "ankle-opening", "Ankle Opening", |s| s.ankle_opening, |s, v| s.ankle_opening = v)}
                    {shalwar_input(draft, "crotch-depth", "Crotch Depth", |s| s.crotch_depth, |s, v| s.crotch_depth = v)}
                    {shalwar_input(draft, "shalwar-hip-circumference", "Hip Circumference", |s| s.hip_circumference, |s, v| s.hip_circumference = v)}
                    {shalwar_input(draft, "inseam-length", "Inseam Length", |s| s.inseam_length, |s, v| s.inseam_length = v)}
                    {shalwar_input(draft, "outseam-length", "Outseam Length", |s| s.outseam_length, |s, v| s.outseam_length = v)}
                    {shalwar_input(draft, "rise", "Rise", |s| s.rise, |s, v| s.rise = v)}
                    {shalwar_input(draft, "thigh-circumference", "Thigh Circumference", |s| s.thigh_circumference, |s, v| s.thigh_circumference = v)}
                    {shalwar_input(draft, "shalwar-waist-circumference", "Waist Circumference", |s| s.waist_circumference, |s, v| s.waist_circumference = v)}
                </div>

                <h4>"Fit Preferences"</h4>
                <div class="editor__grid">
                    {fit_input(draft, "kameez-fit", "Kameez Fit", |p| p.kameez_fit.as_ref(), |p, v| p.kameez_fit = v)}
                    {fit_input(draft, "neckline-style", "Neckline Style", |p| p.neckline_style.as_ref(), |p, v| p.neckline_style = v)}
                    {fit_input(draft, "pant-style", "Pant Style", |p| p.pant_style.as_ref(), |p, v| p.pant_style = v)}
                    {fit_input(draft, "sleeve-style", "Sleeve Style", |p| p.sleeve_style.as_ref(), |p, v| p.sleeve_style = v)}
                </div>

                <h4>"Additional Information"</h4>
                <div class="editor__grid">
                    {metric_input(draft, "height", "Height", "cm", |d| d.height, |d, v| d.height = v)}
                    {metric_input(draft, "weight", "Weight", "kg", |d| d.weight, |d, v| d.weight = v)}
                </div>
            </div>

            <div class="editor__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submitting
                    on_click=move |_| on_save.run(draft.get_untracked())
                >
                    {if submitting { "Saving..." } else { "Save" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=submitting
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_measure_handles_blank_and_invalid_input() {
        assert_eq!(parse_measure("36"), Some(36.0));
        assert_eq!(parse_measure(" 22.5 "), Some(22.5));
        assert_eq!(parse_measure(""), None);
        assert_eq!(parse_measure("   "), None);
        assert_eq!(parse_measure("abc"), None);
    }
}
