use dioxus::prelude::*;
use store::{OrderingRules, Roster};

use crate::components::TeamCard;
use crate::use_site_data;

/// The organizing team, laid out by [`Roster::group`].
#[component]
pub fn TeamSection() -> Element {
    let data = use_site_data();
    let roster = use_memo(move || {
        let rules = OrderingRules::from_config(&data.config.read().roster);
        Roster::group(&data.members.read(), &data.department_names(), &rules)
    });
    let roster = roster();

    rsx! {
        section {
            id: "team",
            class: "section",
            h2 { "Organizing Team" }

            if roster.president.is_some() || roster.vice_president.is_some() {
                div {
                    class: "team-leads",
                    if let Some(member) = roster.president.clone() {
                        TeamCard { member }
                    }
                    if let Some(member) = roster.vice_president.clone() {
                        TeamCard { member }
                    }
                }
            }
            if !roster.core_others.is_empty() {
                div {
                    class: "team-grid",
                    for member in roster.core_others.clone() {
                        TeamCard { key: "{member.id}", member }
                    }
                }
            }

            if !roster.advisory.is_empty() {
                div {
                    class: "team-group",
                    h3 { "Advisory" }
                    div {
                        class: "team-grid",
                        for member in roster.advisory.clone() {
                            TeamCard { key: "{member.id}", member }
                        }
                    }
                }
            }

            for group in roster.departments.clone() {
                div {
                    key: "{group.name}",
                    class: "team-group",
                    h3 { "{group.name}" }
                    if group.is_empty() {
                        p { class: "team-empty", "No members yet." }
                    } else {
                        div {
                            class: "team-grid",
                            for member in group.members {
                                TeamCard { key: "{member.id}", member }
                            }
                        }
                    }
                }
            }
        }
    }
}
