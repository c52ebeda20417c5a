use dioxus::prelude::*;
use store::validate::{validate_department_name, validate_member};
use store::{Department, ImageUpload, Member, MemberDraft};

use crate::components::{read_uploads, Button, ButtonVariant, ConfirmDialog, Field};
use crate::icons::{FaPen, FaTrash};
use crate::{use_site_data, Icon};

/// What the open confirmation dialog would delete.
#[derive(Clone, Debug, PartialEq)]
enum PendingDelete {
    Department(Department),
    Member(Member),
}

impl PendingDelete {
    fn message(&self) -> String {
        match self {
            PendingDelete::Department(d) => format!("Delete department: {}?", d.name),
            PendingDelete::Member(_) => "Are you sure?".to_string(),
        }
    }
}

fn draft_of(member: &Member) -> MemberDraft {
    MemberDraft {
        name: member.name.clone(),
        role: member.role.clone(),
        department_id: member.department_id.clone(),
        image_url: None,
    }
}

#[component]
pub(super) fn TeamTab() -> Element {
    let data = use_site_data();
    let mut new_department = use_signal(String::new);
    let mut editing = use_signal(|| None::<String>);
    let mut draft = use_signal(MemberDraft::default);
    let mut photo = use_signal(|| None::<ImageUpload>);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<PendingDelete>);
    let mut form_key = use_signal(|| 0u32);

    let mut reset = move || {
        editing.set(None);
        draft.set(MemberDraft::default());
        photo.set(None);
        form_key += 1;
    };

    let add_department = move |_: MouseEvent| {
        let name = match validate_department_name(&new_department(), &data.departments.read()) {
            Ok(name) => name,
            Err(e) => {
                data.reject(&e.to_string());
                return;
            }
        };
        spawn(async move {
            if data.add_department(name).await {
                new_department.set(String::new());
            }
        });
    };

    let save_member = move |_: MouseEvent| {
        let current = draft();
        if let Err(e) = validate_member(&current) {
            data.reject(&e.to_string());
            return;
        }
        saving.set(true);
        spawn(async move {
            if data.save_member(editing(), current, photo()).await {
                reset();
            }
            saving.set(false);
        });
    };

    let departments = data.departments.read().clone();
    let members = data.members.read().clone();
    let selected_department = draft.read().department_id.clone().unwrap_or_default();

    rsx! {
        div {
            class: "admin-panel",
            h3 { "Manage Team & Departments" }

            div {
                class: "admin-subpanel",
                h4 { "Manage Departments" }
                div {
                    class: "inline-form",
                    input {
                        placeholder: "New Department Name",
                        value: "{new_department}",
                        oninput: move |evt| new_department.set(evt.value()),
                    }
                    Button { onclick: add_department, "Add" }
                }
                ul {
                    class: "chip-list",
                    for department in departments.clone() {
                        li {
                            key: "{department.id}",
                            class: "chip",
                            "{department.name}"
                            button {
                                class: "chip-remove",
                                aria_label: "Delete department",
                                onclick: {
                                    let department = department.clone();
                                    move |_| pending_delete.set(Some(PendingDelete::Department(department.clone())))
                                },
                                "×"
                            }
                        }
                    }
                }
            }

            div {
                key: "{form_key}",
                class: "admin-form",
                h4 { if editing().is_some() { "Edit Member" } else { "Add Member" } }
                Field {
                    label: "Full Name",
                    input {
                        value: "{draft.read().name}",
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                }
                Field {
                    label: "Role",
                    input {
                        placeholder: "e.g. Head, Vice Head, Member",
                        value: "{draft.read().role}",
                        oninput: move |evt| draft.write().role = evt.value(),
                    }
                }
                Field {
                    label: "Department",
                    select {
                        value: "{selected_department}",
                        onchange: move |evt| {
                            let value = evt.value();
                            draft.write().department_id = (!value.is_empty()).then_some(value);
                        },
                        option { value: "", "Select department" }
                        for department in departments {
                            option {
                                key: "{department.id}",
                                value: "{department.id}",
                                selected: department.id == selected_department,
                                "{department.name}"
                            }
                        }
                    }
                }
                Field {
                    label: "Photo",
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt| async move {
                            photo.set(read_uploads(evt).await.into_iter().next());
                        },
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        disabled: saving(),
                        onclick: save_member,
                        if saving() { "Saving..." } else if editing().is_some() { "Update Member" } else { "Add Member" }
                    }
                    if editing().is_some() {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| reset(),
                            "Cancel"
                        }
                    }
                }
            }

            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Role" }
                        th { "Department" }
                        th {}
                    }
                }
                tbody {
                    for member in members {
                        tr {
                            key: "{member.id}",
                            td { "{member.name}" }
                            td { "{member.role}" }
                            td { "{member.dept}" }
                            td {
                                class: "row-actions",
                                button {
                                    class: "icon-button",
                                    aria_label: "Edit",
                                    onclick: {
                                        let member = member.clone();
                                        move |_| {
                                            editing.set(Some(member.id.clone()));
                                            draft.set(draft_of(&member));
                                            photo.set(None);
                                        }
                                    },
                                    Icon { width: 14, height: 14, icon: FaPen }
                                }
                                button {
                                    class: "icon-button danger",
                                    aria_label: "Delete",
                                    onclick: {
                                        let member = member.clone();
                                        move |_| pending_delete.set(Some(PendingDelete::Member(member.clone())))
                                    },
                                    Icon { width: 14, height: 14, icon: FaTrash }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(pending) = pending_delete() {
                ConfirmDialog {
                    message: pending.message(),
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: {
                        let pending = pending.clone();
                        move |_| {
                            pending_delete.set(None);
                            let pending = pending.clone();
                            spawn(async move {
                                match pending {
                                    PendingDelete::Department(d) => {
                                        data.delete_department(d.id).await;
                                    }
                                    PendingDelete::Member(m) => {
                                        if data.delete_member(m.id.clone()).await
                                            && editing() == Some(m.id)
                                        {
                                            reset();
                                        }
                                    }
                                }
                            });
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_confirmation_names_the_department() {
        let pending = PendingDelete::Department(Department {
            id: "d1".into(),
            name: "Media Department".into(),
            sort_order: 0,
        });
        assert_eq!(pending.message(), "Delete department: Media Department?");
    }

    #[test]
    fn test_edit_draft_keeps_current_photo() {
        let member = Member {
            id: "m1".into(),
            name: "Asha".into(),
            role: "Head".into(),
            dept: "Media Department".into(),
            department_id: Some("d1".into()),
            img: "/uploads/team/1-asha.jpg".into(),
        };
        let draft = draft_of(&member);
        assert_eq!(draft.department_id.as_deref(), Some("d1"));
        assert_eq!(draft.image_url, None);
    }
}
