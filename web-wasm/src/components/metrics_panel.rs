//! 指標パネル（精度・速度・勝者・グラフ）

use leptos::prelude::*;
use vaccine_ocr_common::view::EngineCard;
use vaccine_ocr_common::ChartKind;

#[component]
pub fn MetricsPanel(engines: Vec<EngineCard>, winner: String, sources: String) -> impl IntoView {
    let tiles = engines
        .into_iter()
        .filter_map(|card| {
            let figures = card.figures?;
            let prefix = card.prefix;
            Some(view! {
                <div class={format!("metric-tile {}", prefix)}>
                    <h4>{card.title}</h4>
                    <p>"ความแม่นยำ: " <strong id={format!("{}Accuracy", prefix)}>{figures.accuracy}</strong></p>
                    <p>"ความเร็ว: " <strong id={format!("{}Speed", prefix)}>{figures.speed}</strong></p>
                    <p>"เวลาประมวลผล: " <span id={format!("{}Time", prefix)}>{figures.time}</span></p>
                </div>
            })
        })
        .collect_view();

    view! {
        <div class="card metrics-panel">
            <h3>"📊 เปรียบเทียบประสิทธิภาพ"</h3>
            <div class="metric-tiles">{tiles}</div>
            <p class="winner">"เอนจินที่แนะนำ: " <strong id="winnerName">{winner}</strong></p>
            <p class="sources">"ที่มาของข้อมูลรวม: " <span id="mergedSources">{sources}</span></p>
            <div class="charts">
                {ChartKind::ALL
                    .iter()
                    .map(|kind| view! {
                        <div class="chart-box">
                            <canvas id={kind.canvas_id()}></canvas>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
