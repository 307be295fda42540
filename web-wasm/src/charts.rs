//! 棒グラフの描画スロット
//!
//! 1つのcanvasにつき1つのスロットを持ち、再描画は
//! 「既存インスタンスを破棄 → 新規作成」で行う。

use vaccine_ocr_common::view::ChartSeries;
use vaccine_ocr_common::ChartKind;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/chart-bridge.js")]
extern "C" {
    /// Chart.jsのインスタンスを生成（canvasが無ければnull）
    #[wasm_bindgen(js_name = "createBarChart", catch)]
    fn create_bar_chart_js(canvas_id: &str, config_json: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "destroyChart")]
    fn destroy_chart_js(chart: &JsValue);
}

/// グラフ描画の実体
pub trait ChartBackend {
    type Handle;

    /// 描画先が無い場合は `Ok(None)`
    fn create(&self, canvas_id: &str, config_json: &str) -> Result<Option<Self::Handle>, String>;

    fn destroy(&self, handle: Self::Handle);
}

/// Chart.js（ブラウザ）
#[derive(Default)]
pub struct ChartJs;

impl ChartBackend for ChartJs {
    type Handle = JsValue;

    fn create(&self, canvas_id: &str, config_json: &str) -> Result<Option<JsValue>, String> {
        let handle = create_bar_chart_js(canvas_id, config_json)
            .map_err(|e| format!("Chart error: {:?}", e))?;
        if handle.is_null() || handle.is_undefined() {
            Ok(None)
        } else {
            Ok(Some(handle))
        }
    }

    fn destroy(&self, handle: JsValue) {
        destroy_chart_js(&handle);
    }
}

pub struct ChartSlot<B: ChartBackend> {
    kind: ChartKind,
    handle: Option<B::Handle>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, handle: None }
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    pub fn redraw(&mut self, backend: &B, series: &ChartSeries) -> Result<(), String> {
        self.dispose(backend);
        let config = self
            .kind
            .config_json(series)
            .map_err(|e| format!("Chart config error: {}", e))?;
        self.handle = backend.create(self.kind.canvas_id(), &config)?;
        Ok(())
    }

    pub fn dispose(&mut self, backend: &B) {
        if let Some(handle) = self.handle.take() {
            backend.destroy(handle);
        }
    }
}

/// 精度グラフと速度グラフ
pub struct ChartBoard<B: ChartBackend = ChartJs> {
    backend: B,
    slots: Vec<ChartSlot<B>>,
}

impl Default for ChartBoard<ChartJs> {
    fn default() -> Self {
        Self::with_backend(ChartJs)
    }
}

impl<B: ChartBackend> ChartBoard<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            slots: ChartKind::ALL.iter().map(|kind| ChartSlot::new(*kind)).collect(),
        }
    }

    /// 全グラフを描き直し、失敗したものの理由を返す
    ///
    /// 1つが失敗しても他方は描画する。
    pub fn redraw_all(&mut self, series: &ChartSeries) -> Vec<String> {
        let backend = &self.backend;
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.redraw(backend, series).err())
            .collect()
    }

    pub fn dispose_all(&mut self) {
        let backend = &self.backend;
        for slot in self.slots.iter_mut() {
            slot.dispose(backend);
        }
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_live()).count()
    }
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_missing_canvas_creates_nothing() {
        let mut board = ChartBoard::default();
        let errors = board.redraw_all(&ChartSeries::default());
        assert!(errors.is_empty());
        assert_eq!(board.live_count(), 0);
    }
}
