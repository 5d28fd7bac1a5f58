use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use crate::context::use_card;

/// Date as "February 8, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[component]
pub fn Footer() -> Element {
    let card = use_card();
    let footer = card.read().content().footer.clone();
    let today = long_date(Local::now().date_naive());

    rsx! {
        footer { class: "footer",
            span { "{footer.made_with} · {footer.occasion}" }
            span { class: "footer__date", "{today}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_spells_out_the_month() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
        assert_eq!(long_date(date), "February 8, 2026");
    }
}
