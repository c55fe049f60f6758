use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use log::info;
use complaints::{ComplaintCategory, ComplaintField, FormSnapshot, FormStatus, SubmitOutcome};

use crate::complaint_client::build_controller;

#[function_component(ComplaintModal)]
pub fn complaint_modal() -> Html {
    let snapshot = use_state(FormSnapshot::default);

    let controller = {
        let snapshot = snapshot.clone();
        use_memo(
            move |_| {
                let controller = build_controller();
                controller.set_observer(move |s: &FormSnapshot| snapshot.set(s.clone()));
                controller
            },
            (),
        )
    };

    let open = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.open())
    };

    let close = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            controller.close();
        })
    };

    let on_input = |field: ComplaintField| {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.update_field(field, &input.value());
        })
    };

    let on_description = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            controller.update_field(ComplaintField::Description, &input.value());
        })
    };

    let on_category = {
        let controller = controller.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            controller.update_field(ComplaintField::Category, &select.value());
        })
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                match controller.submit().await {
                    SubmitOutcome::Registered(record) => {
                        info!("Complaint {} registered", record.complaint_id)
                    }
                    SubmitOutcome::Failed(e) => log::error!("Error submitting complaint: {}", e),
                    SubmitOutcome::NotSubmittable | SubmitOutcome::AlreadySubmitting => {}
                }
            });
        })
    };

    let submitting = snapshot.status == FormStatus::Submitting;
    let form = &snapshot.form;
    let selected = form.value(ComplaintField::Category);

    html! {
        <>
            <button type="button" class="complaint-trigger" onclick={open}>
                {"Register Complaint"}
            </button>

            if snapshot.open {
                <div class="complaint-overlay">
                    <div class="complaint-dialog" role="dialog" aria-labelledby="complaint-title">
                        <div class="complaint-header">
                            <h2 id="complaint-title">{"Register a Complaint"}</h2>
                            <p>{"We're sorry you had a problem. Tell us what happened and we'll send a confirmation to your email and phone."}</p>
                        </div>

                        <form class="complaint-form" onsubmit={on_submit}>
                            <div class="complaint-row">
                                <div class="complaint-field">
                                    <label for="name">{"Full Name *"}</label>
                                    <input id="name" type="text" placeholder="John Doe"
                                        value={form.value(ComplaintField::Name).to_string()}
                                        oninput={on_input(ComplaintField::Name)} required=true />
                                </div>
                                <div class="complaint-field">
                                    <label for="email">{"Email Address *"}</label>
                                    <input id="email" type="email" placeholder="john@example.com"
                                        value={form.value(ComplaintField::Email).to_string()}
                                        oninput={on_input(ComplaintField::Email)} required=true />
                                </div>
                            </div>

                            <div class="complaint-field">
                                <label for="phone">{"Phone Number *"}</label>
                                <input id="phone" type="tel" placeholder="+91 9876543210"
                                    value={form.value(ComplaintField::Phone).to_string()}
                                    oninput={on_input(ComplaintField::Phone)} required=true />
                            </div>

                            <div class="complaint-field">
                                <label for="category">{"Complaint Category *"}</label>
                                <select id="category" onchange={on_category}>
                                    <option value="" selected={selected.is_empty()} disabled=true>
                                        {"Select a category"}
                                    </option>
                                    { for ComplaintCategory::ALL.iter().map(|category| html! {
                                        <option value={category.label()} selected={selected == category.label()}>
                                            { category.label() }
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div class="complaint-field">
                                <label for="subject">{"Subject *"}</label>
                                <input id="subject" type="text" placeholder="Brief description of your complaint"
                                    value={form.value(ComplaintField::Subject).to_string()}
                                    oninput={on_input(ComplaintField::Subject)} required=true />
                            </div>

                            <div class="complaint-field">
                                <label for="description">{"Detailed Description *"}</label>
                                <textarea id="description" rows="5"
                                    placeholder="Please provide detailed information about your complaint..."
                                    value={form.value(ComplaintField::Description).to_string()}
                                    oninput={on_description} required=true />
                            </div>

                            if snapshot.status == FormStatus::Success {
                                <div class="complaint-status success">
                                    <p class="status-title">{"Complaint registered successfully!"}</p>
                                    <p>{"Confirmation has been sent to your email and phone number."}</p>
                                    if let Some(id) = &snapshot.last_complaint_id {
                                        <p class="complaint-id">{format!("Your complaint ID: {}", id)}</p>
                                    }
                                </div>
                            }

                            if snapshot.status == FormStatus::Error {
                                <div class="complaint-status error">
                                    <p class="status-title">{"Error submitting complaint"}</p>
                                    <p>{"Please check your email and phone number, then try again."}</p>
                                </div>
                            }

                            <div class="complaint-actions">
                                <button type="button" class="cancel-button" onclick={close} disabled={submitting}>
                                    {"Cancel"}
                                </button>
                                <button type="submit" class="submit-button" disabled={!snapshot.can_submit()}>
                                    if submitting {
                                        <span class="spinner"></span>
                                        {"Submitting..."}
                                    } else {
                                        {"Submit Complaint"}
                                    }
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }

            <style>
                {r#"
                .complaint-trigger {
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .complaint-trigger:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .complaint-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(2, 6, 23, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }

                .complaint-dialog {
                    width: 100%;
                    max-width: 640px;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #fff;
                    color: #0f172a;
                    border-radius: 16px;
                    padding: 2rem;
                    animation: dialogIn 0.25s ease-out;
                }

                @keyframes dialogIn {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .complaint-header h2 {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }

                .complaint-header p {
                    color: #64748b;
                    margin-bottom: 1.5rem;
                }

                .complaint-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .complaint-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .complaint-field input,
                .complaint-field select,
                .complaint-field textarea {
                    padding: 0.6rem 0.8rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    font: inherit;
                }

                .complaint-status {
                    padding: 1rem;
                    border-radius: 8px;
                    margin-bottom: 1rem;
                    animation: dialogIn 0.25s ease-out;
                }

                .complaint-status.success {
                    background: #ecfdf5;
                    border: 1px solid #a7f3d0;
                    color: #065f46;
                }

                .complaint-status.error {
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    color: #991b1b;
                }

                .status-title {
                    font-weight: 600;
                }

                .complaint-id {
                    font-family: monospace;
                    margin-top: 0.5rem;
                }

                .complaint-actions {
                    display: flex;
                    justify-content: flex-end;
                    gap: 0.75rem;
                    padding-top: 1rem;
                }

                .cancel-button {
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    border: 1px solid #cbd5e1;
                    background: #fff;
                    cursor: pointer;
                }

                .submit-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    border: none;
                    color: #fff;
                    background: linear-gradient(90deg, #06b6d4, #10b981);
                    cursor: pointer;
                }

                .submit-button:disabled,
                .cancel-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .spinner {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid #fff;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                @media (max-width: 640px) {
                    .complaint-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </>
    }
}
