//! エンジン別の抽出結果カード

use leptos::prelude::*;
use vaccine_ocr_common::messages;
use vaccine_ocr_common::view::{EngineCard, EngineFigures};

#[component]
pub fn EnginePanel(card: EngineCard) -> impl IntoView {
    let class = format!("card engine-card {}", card.prefix);
    let badge = card.figures.as_ref().map(completeness_badge);

    view! {
        <div class=class>
            <div class="card-header">
                <h3>{card.title}</h3>
                {badge}
            </div>
            <dl class="field-list">
                {card
                    .fields
                    .into_iter()
                    .map(|row| {
                        let missing = row.value == messages::NOT_FOUND;
                        view! {
                            <dt>{row.label}</dt>
                            <dd id={row.dom_id} class:missing=missing>{row.value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}

fn completeness_badge(figures: &EngineFigures) -> impl IntoView {
    let detected = figures.detected.clone();
    let status = figures.is_complete.map(|complete| {
        if complete {
            ("badge complete", messages::COMPLETE)
        } else {
            ("badge incomplete", messages::INCOMPLETE)
        }
    });

    view! {
        <span class="completeness">
            {detected.map(|text| view! { <span class="detected">{text}</span> })}
            {status.map(|(class, text)| view! { <span class=class>{text}</span> })}
        </span>
    }
}
