use dioxus::prelude::*;
use store::models::placeholder_avatar;
use store::Member;

#[component]
pub fn TeamCard(member: Member) -> Element {
    let mut src = use_signal(|| member.img.clone());
    let fallback = placeholder_avatar(&member.name);

    rsx! {
        div {
            class: "team-card",
            img {
                src: "{src}",
                alt: "{member.name}",
                onerror: move |_| {
                    if src() != fallback {
                        src.set(fallback.clone());
                    }
                },
            }
            div { class: "team-role", "{member.role}" }
            div { class: "team-name", "{member.name}" }
        }
    }
}
