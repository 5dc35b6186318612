//! Order detail page (MVVM standard).

use super::edit_session::EditSession;
use super::editor::MeasurementEditor;
use super::status::status_presentation;
use super::view_model::OrderDetailsVm;
use crate::shared::components::back_button::BackButton;
use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_money;
use crate::shared::toast::ToastService;
use contracts::domain::order::projection::{self, DisplayField};
use contracts::domain::order::{OrderRecord, Product};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetailPage(#[prop(into)] order_id: Signal<String>) -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");
    let vm = OrderDetailsVm::new(toast);

    // Refetch whenever the route identifier changes.
    Effect::new({
        let vm = vm.clone();
        move || {
            let id = order_id.get();
            if !id.is_empty() {
                vm.load(id);
            }
        }
    });

    let state = vm.state;
    let vm_content = vm.clone();

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <BackButton />
                    <h1 class="page__title">"Order Details"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if state.with(|s| s.is_loading()) {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 48px;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }
                        .into_any()
                    } else if let Some(err) = state.with(|s| s.error().map(str::to_string)) {
                        view! {
                            <div class="error-box">
                                <strong>"Error: "</strong>
                                {err}
                            </div>
                        }
                        .into_any()
                    } else if let Some(order) = state.with(|s| s.order().cloned()) {
                        view! { <OrderContent vm=vm_content.clone() order=order /> }.into_any()
                    } else {
                        view! { <div>"No data"</div> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn OrderContent(vm: OrderDetailsVm, order: OrderRecord) -> impl IntoView {
    let total = vm.total_price();
    let can_edit = vm.can_edit();
    let vm_measure = vm.clone();
    let vm_edit = vm.clone();
    let vm_modal = vm.clone();

    view! {
        <div class="card">
            <div class="card__columns">
                <OrderInfo order=order.clone() />
                <PaymentBlock order=order.clone() />
            </div>

            <hr />
            <ProductsBlock products=order.products.clone() />
            <MeasurementsBlock vm=vm_measure order=order />

            <div class="order-footer">
                <Show when=move || can_edit.get()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click={
                            let vm = vm_edit.clone();
                            move |_| vm.open_editor()
                        }
                    >
                        "Edit Stitching Data"
                    </Button>
                </Show>
                <span class="order-footer__total">
                    {move || format!("Total Price: Rs {}", format_money(total.get()))}
                </span>
            </div>
        </div>
        <EditModal vm=vm_modal />
    }
}

/// One label/value cell, rendered only when the value is present.
fn info_field(label: &'static str, value: Option<String>) -> impl IntoView {
    value.map(|v| {
        view! {
            <div class="info-grid__item">
                <h4>{label}</h4>
                <span>{v}</span>
            </div>
        }
    })
}

#[component]
fn OrderInfo(order: OrderRecord) -> impl IntoView {
    // Shown only when both name parts are present.
    let customer_name = match (&order.first_name, &order.last_name) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
        _ => None,
    };

    view! {
        <div class="info-grid">
            {info_field("Order ID", Some(order.order_id.clone()))}
            {info_field("Order Date", order.order_date.map(|d| format_date(&d)))}
            {info_field("Customer Name", customer_name)}
            {info_field("Email", order.email.clone())}
            {info_field("Phone", order.phone.clone())}
            {order.order_status.as_deref().map(|code| {
                let status = status_presentation(code);
                view! {
                    <div class="info-grid__item">
                        <h4>"Status"</h4>
                        <span style=format!("color: {}; font-weight: bold;", status.color)>
                            {status.label}
                        </span>
                    </div>
                }
            })}
            {info_field("Address", order.address.clone())}
            {info_field("Apartment", order.apartment.clone())}
            {info_field("Post Code", order.post_code.clone())}
            {info_field("Additional Information", order.additional_information.clone())}
        </div>
    }
}

/// Exactly one of the two payment renderings, selected by the flag; nothing
/// when the flag is absent.
#[component]
fn PaymentBlock(order: OrderRecord) -> impl IntoView {
    match order.cash_on_delivery {
        Some(true) => view! {
            <div class="payment-block">
                <h4>"Payment Method"</h4>
                <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Success>
                    "Cash on Delivery"
                </Badge>
            </div>
        }
        .into_any(),
        Some(false) => view! {
            <div class="payment-block">
                <h4>"Payment Proof"</h4>
                {order.cash_on_delivery_image.map(|src| {
                    view! { <img class="payment-block__image" src=src alt="Payment proof" loading="lazy" /> }
                })}
            </div>
        }
        .into_any(),
        None => view! { <></> }.into_any(),
    }
}

#[component]
fn ProductsBlock(products: Vec<Product>) -> impl IntoView {
    view! {
        <h3>"Products:"</h3>
        {products
            .into_iter()
            .map(|product| {
                view! {
                    <div class="product-row">
                        {product.image_url.clone().map(|src| {
                            view! { <img class="product-row__image" src=src alt="Product" /> }
                        })}
                        <div class="product-row__body">
                            <h4>{format!("Product Name: {}", product.title)}</h4>
                            <div class="product-row__meta">{format!("Product ID: {}", product.product_id)}</div>
                            <div>{format!("Quantity: {}", product.quantity)}</div>
                            <div class="product-row__price">{format!("Price: Rs {}", format_money(product.price))}</div>
                            {product.stitched_price.map(|p| {
                                view! {
                                    <div class="product-row__price">
                                        {format!("Stitched Price: Rs {}", format_money(p))}
                                    </div>
                                }
                            })}
                            {product.is_stitching.unwrap_or(false).then(|| {
                                view! {
                                    <Badge appearance=BadgeAppearance::Outline>"Stitching"</Badge>
                                }
                            })}
                        </div>
                    </div>
                }
            })
            .collect_view()}
    }
}

/// One projected section with its header, suppressed entirely when empty.
fn field_section(title: &'static str, fields: Vec<DisplayField>) -> impl IntoView {
    (!fields.is_empty()).then(|| {
        view! {
            <div class="measurement-section">
                <h4>{title}</h4>
                <div class="info-grid">
                    {fields
                        .into_iter()
                        .map(|field| {
                            let value = match field.unit {
                                Some(unit) => format!("{} {}", field.value, unit),
                                None => field.value,
                            };
                            view! {
                                <div class="info-grid__item">
                                    <h5>{field.label}</h5>
                                    <span>{value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    })
}

#[component]
fn MeasurementsBlock(vm: OrderDetailsVm, order: OrderRecord) -> impl IntoView {
    // The whole block is re-created with the order snapshot, so a snapshot of
    // the derived record is what the sections render from.
    let primary = vm.primary_record().get_untracked();
    let primary = primary.as_ref();
    let kameez = projection::kameez_section(primary);
    let shalwar = projection::shalwar_section(primary);
    let metrics = projection::body_metrics_section(primary);
    let stitch_image = projection::stitch_image(primary).map(str::to_string);
    let fit_blocks = projection::fit_preference_sections(&order.products);

    let empty = kameez.is_empty()
        && shalwar.is_empty()
        && metrics.is_empty()
        && stitch_image.is_none()
        && fit_blocks.iter().all(|block| block.is_empty());

    (!empty).then(|| {
        view! {
            <hr />
            <h3>"Stretch Data:"</h3>
            {field_section("Kameez Measurements", kameez)}
            {field_section("Shalwar Measurements", shalwar)}
            {fit_blocks
                .into_iter()
                .map(|block| field_section("Fit Preferences", block))
                .collect_view()}
            {field_section("Additional Information", metrics)}
            {stitch_image.map(|src| {
                view! {
                    <div class="measurement-section">
                        <h4>"Stitching Image"</h4>
                        <img class="measurement-section__image" src=src alt="Stitching reference" />
                    </div>
                }
            })}
        }
    })
}

#[component]
fn EditModal(vm: OrderDetailsVm) -> impl IntoView {
    let edit = vm.edit;

    view! {
        {move || match edit.get() {
            EditSession::Closed => view! { <></> }.into_any(),
            EditSession::Open { draft, error } => {
                let vm_close = vm.clone();
                let vm_save = vm.clone();
                let vm_cancel = vm.clone();
                view! {
                    <ModalFrame on_close=Callback::new(move |_| vm_close.cancel_editor())>
                        <MeasurementEditor
                            initial=draft
                            submitting=false
                            error=error
                            on_save=Callback::new(move |record| vm_save.submit(record))
                            on_cancel=Callback::new(move |_| vm_cancel.cancel_editor())
                        />
                    </ModalFrame>
                }
                .into_any()
            }
            EditSession::Submitting { draft } => {
                view! {
                    <ModalFrame on_close=Callback::new(|_| ())>
                        <MeasurementEditor
                            initial=draft
                            submitting=true
                            error=None
                            on_save=Callback::new(|_: contracts::domain::order::StretchData| ())
                            on_cancel=Callback::new(|_| ())
                        />
                    </ModalFrame>
                }
                .into_any()
            }
        }}
    }
}
