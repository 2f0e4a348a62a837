//! Help Modal Component
//!
//! Info button and the dialog it opens. Closing fades out before hiding.

use leptos::prelude::*;

use crate::browser::defer;

const CLOSE_FADE_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq, Eq)]
enum HelpPhase {
    Hidden,
    Visible,
    Closing,
}

#[component]
pub fn HelpModal() -> impl IntoView {
    let (phase, set_phase) = signal(HelpPhase::Hidden);

    let close = move || {
        if phase.get_untracked() != HelpPhase::Visible {
            return;
        }
        set_phase.set(HelpPhase::Closing);
        defer(CLOSE_FADE_MS, move || {
            // Reopened while fading
            if phase.get_untracked() == HelpPhase::Closing {
                set_phase.set(HelpPhase::Hidden);
            }
        });
    };

    let modal_class = move || match phase.get() {
        HelpPhase::Hidden => "modal hidden",
        HelpPhase::Visible => "modal visible",
        HelpPhase::Closing => "modal",
    };

    view! {
        <button class="info-btn" aria-label="How it works" on:click=move |_| set_phase.set(HelpPhase::Visible)>
            "?"
        </button>
        <div class=modal_class on:click=move |_| close()>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <h2>"How it works"</h2>
                <ul>
                    <li>"Click a task to tick it off, click × to remove it."</li>
                    <li>"Type a task and press Enter to add it."</li>
                    <li>"Load a .txt file to replace the list, one task per line."</li>
                    <li>"Finish every task for a surprise."</li>
                </ul>
                <button class="close-modal-btn" on:click=move |_| close()>"Got it"</button>
            </div>
        </div>
    }
}
