//! Document head: title, description, social cards and icons.

use dioxus::prelude::*;
use lovenote_core::meta::MetaKey;
use lovenote_core::HeadTag;

use crate::context::use_card;

#[component]
pub fn HeadMeta() -> Element {
    let card = use_card();
    let meta = card.read().content().meta.clone();
    let tags = meta.tags();

    rsx! {
        document::Title { "{meta.title}" }
        for (i, tag) in tags.into_iter().enumerate() {
            {head_tag(i, tag)}
        }
    }
}

fn head_tag(i: usize, tag: HeadTag) -> Element {
    match tag {
        HeadTag::Meta {
            key: MetaKey::Name,
            value,
            content,
        } => rsx! {
            document::Meta { key: "{i}", name: value, content }
        },
        HeadTag::Meta {
            key: MetaKey::Property,
            value,
            content,
        } => rsx! {
            document::Meta { key: "{i}", property: value, content }
        },
        HeadTag::Link {
            rel,
            href,
            sizes,
            mime,
        } => rsx! {
            document::Link { key: "{i}", rel, href, sizes, r#type: mime }
        },
    }
}
