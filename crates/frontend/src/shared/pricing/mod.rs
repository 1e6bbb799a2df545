//! Секция "Pricing" контентных записей: разбор полей формы и модалка.

use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalHeader;
use contracts::shared::pricing::Pricing;
use leptos::prelude::*;

fn parse_amount(raw: &str, field: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number", field))
}

/// Поля формы как строки → `Pricing`. Пустая скидка означает её отсутствие.
pub fn parse_pricing(price_raw: &str, discount_raw: &str) -> Result<Pricing, String> {
    let price = if price_raw.trim().is_empty() {
        0.0
    } else {
        parse_amount(price_raw, "Price")?
    };
    let discount_price = if discount_raw.trim().is_empty() {
        None
    } else {
        Some(parse_amount(discount_raw, "Discount price")?)
    };
    let pricing = Pricing {
        price,
        discount_price,
    };
    pricing.validate()?;
    Ok(pricing)
}

fn format_amount(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}

/// Цена для таблиц: "Free", "499" или "499 → 399 (-20%)"
pub fn format_price(p: &Pricing) -> String {
    if p.is_free() {
        return "Free".to_string();
    }
    match (p.discount_price, p.discount_percent()) {
        (Some(d), Some(percent)) => format!(
            "{} → {} (-{}%)",
            format_amount(p.price),
            format_amount(d),
            percent
        ),
        _ => format_amount(p.effective_price()),
    }
}

/// Форма цены. Отправку выполняет вызывающий код через `on_submit`.
#[component]
pub fn PricingForm(
    #[prop(into)] title: String,
    initial: Pricing,
    saving: RwSignal<bool>,
    on_submit: Callback<Pricing>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let price = RwSignal::new(format_amount(initial.price));
    let discount = RwSignal::new(initial.discount_price.map(format_amount).unwrap_or_default());
    let error = RwSignal::new(None::<String>);

    let preview = move || match parse_pricing(&price.get(), &discount.get()) {
        Ok(p) => format!("Customer pays: {}", format_price(&p)),
        Err(_) => String::new(),
    };

    let submit = move || match parse_pricing(&price.get_untracked(), &discount.get_untracked()) {
        Ok(p) => {
            error.set(None);
            on_submit.run(p);
        }
        Err(e) => error.set(Some(e)),
    };

    view! {
        <div class="details-container">
            <ModalHeader title=Signal::derive(move || title.clone()) on_close=on_cancel />
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="details-form">
                <Input
                    label="Price"
                    id="pricing-price"
                    input_type="number"
                    value=price
                    on_input=Callback::new(move |v| price.set(v))
                    placeholder="0 for free"
                />
                <Input
                    label="Discount price"
                    id="pricing-discount"
                    input_type="number"
                    value=discount
                    on_input=Callback::new(move |v| discount.set(v))
                    placeholder="optional"
                />
                <div class="form__hint">{preview}</div>
            </div>
            <div class="details-actions">
                <button class="button button--primary" disabled=move || saving.get() on:click=move |_| submit()>
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Save pricing" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pricing_accepts_blank_discount() {
        let p = parse_pricing("499", " ").unwrap();
        assert_eq!(p.price, 499.0);
        assert_eq!(p.discount_price, None);
        assert_eq!(parse_pricing("", "").unwrap(), Pricing::free());
    }

    #[test]
    fn test_parse_pricing_rejects_bad_input() {
        assert_eq!(parse_pricing("abc", ""), Err("Price must be a number".to_string()));
        assert!(parse_pricing("100", "150").is_err());
        assert!(parse_pricing("-1", "").is_err());
    }

    #[test]
    fn test_parse_pricing_decimal_comma() {
        let p = parse_pricing("99,50", "79,5").unwrap();
        assert_eq!(p.price, 99.5);
        assert_eq!(p.discount_price, Some(79.5));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&Pricing::free()), "Free");
        let p = Pricing {
            price: 1000.0,
            discount_price: Some(800.0),
        };
        assert_eq!(format_price(&p), "1000 → 800 (-20%)");
        let plain = Pricing {
            price: 99.5,
            discount_price: None,
        };
        assert_eq!(format_price(&plain), "99.50");
    }
}
