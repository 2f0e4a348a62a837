//! Celebration Overlay Component
//!
//! Tree, sparkles and gift markers shown once the whole list is done.

use leptos::prelude::*;

use checklist_core::{OverlayPhase, TreeMotion};

use crate::context::ChecklistContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CelebrationOverlay() -> impl IntoView {
    let ctx = expect_context::<ChecklistContext>();
    let store = use_app_store();

    let overlay_class = move || match store.stage().read().overlay {
        OverlayPhase::Hidden => "end-game-overlay hidden",
        OverlayPhase::Visible => "end-game-overlay visible",
        OverlayPhase::Leaving => "end-game-overlay",
    };

    let tree_class = move || match store.stage().read().tree {
        TreeMotion::Still => "tree",
        TreeMotion::Dropping => "tree animate",
        TreeMotion::Pulsing => "tree animate pulse",
    };

    let sparkles = move || {
        let stage = store.stage().read();
        let batch = stage.sparkle_batch;
        stage.sparkles.iter().copied().enumerate().map(|(i, s)| (batch, i, s)).collect::<Vec<_>>()
    };

    let markers = move || store.stage().read().markers.clone();

    view! {
        <div class=overlay_class>
            <div class="tree-container">
                <div class="sparkles">
                    <For
                        each=sparkles
                        key=|(batch, index, _)| (*batch, *index)
                        children=|(_, _, sparkle)| {
                            let style = format!(
                                "left: calc(50% + {:.1}px); top: calc(50% + {:.1}px); animation-delay: {:.2}s;",
                                sparkle.x, sparkle.y, sparkle.delay_s
                            );
                            view! { <div class="sparkle" style=style></div> }
                        }
                    />
                </div>
                <div class=tree_class>"🎄"</div>
                <div class="gifts-container">
                    <For
                        each=markers
                        key=|marker| marker.slot
                        children=|marker| {
                            let style = format!(
                                "left: calc(50% + {}px); --rot: {:.1}deg;",
                                marker.offset_px, marker.rotation_deg
                            );
                            view! { <div class="gift pop" style=style>{marker.glyph}</div> }
                        }
                    />
                </div>
            </div>
            <h2 class="end-game-title">"All wrapped up!"</h2>
            <button class="start-over-btn" on:click=move |_| ctx.start_over()>
                "Start Over"
            </button>
        </div>
    }
}
