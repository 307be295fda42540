//! 画面セッションの状態（ビューコントローラ）
//!
//! ファイル選択 → プレビュー → 送信 → 表示 の流れを1つの構造体で管理する。
//! ブラウザ版はこれをシグナルに載せ、CLI版は同じ遷移を逐次的に踏む。
//!
//! 送信中の再送信は受け付けない（`Error::Busy`）。
//! 非同期処理の完了はチケット番号で照合し、古い完了通知は捨てる。

use crate::error::{Error, Result};
use crate::validation::validate_upload;
use crate::view::ResultView;

/// 選択中のファイル
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// 読み込み完了後のData URL
    pub data_url: Option<String>,
}

/// 画面の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// ファイル未選択
    Empty,
    /// プレビュー用に読み込み中
    Decoding,
    /// プレビュー表示中（送信可能）
    PreviewReady,
    /// 送信中
    Uploading,
    /// 結果表示中
    Showing,
}

/// 各パネルの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub upload_card: bool,
    pub image_preview: bool,
    pub loading: bool,
    pub results: bool,
}

/// 送信完了の処理結果
#[derive(Debug)]
pub enum Completion {
    Rendered,
    Failed(Error),
    /// リセット等で無効になった古い応答
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pending: Option<PendingFile>,
    phase: Phase,
    result: Option<ResultView>,
    decode_seq: u64,
    request_seq: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            pending: None,
            phase: Phase::Empty,
            result: None,
            decode_seq: 0,
            request_seq: 0,
        }
    }

    pub fn pending(&self) -> Option<&PendingFile> {
        self.pending.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == Phase::Uploading
    }

    /// 現在の読み込みチケット（画像デコード失敗の通知に使う）
    pub fn decode_ticket(&self) -> u64 {
        self.decode_seq
    }

    pub fn preview_src(&self) -> Option<&str> {
        self.pending.as_ref()?.data_url.as_deref()
    }

    pub fn panels(&self) -> Panels {
        let has_preview = self.preview_src().is_some();
        Panels {
            upload_card: !has_preview,
            image_preview: has_preview,
            loading: self.phase == Phase::Uploading,
            results: self.phase == Phase::Showing && self.result.is_some(),
        }
    }

    /// ファイルを選択
    ///
    /// 検証に通れば選択中ファイルを置き換え、読み込みチケットを返す。
    /// 弾かれた場合は状態を変えない。
    pub fn select_file(&mut self, name: &str, mime_type: &str, size: u64) -> Result<u64> {
        if self.is_uploading() {
            return Err(Error::Busy);
        }
        validate_upload(mime_type, size)?;

        self.decode_seq += 1;
        self.pending = Some(PendingFile {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size,
            data_url: None,
        });
        self.phase = Phase::Decoding;
        self.result = None;
        Ok(self.decode_seq)
    }

    /// プレビュー用の読み込み完了
    ///
    /// 古いチケットなら何もせず `false`。
    pub fn preview_loaded(&mut self, ticket: u64, data_url: String) -> bool {
        if ticket != self.decode_seq || self.phase != Phase::Decoding {
            return false;
        }
        if data_url.is_empty() {
            return self.preview_failed(ticket);
        }
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        pending.data_url = Some(data_url);
        self.phase = Phase::PreviewReady;
        true
    }

    /// 読み込み・画像デコード失敗
    ///
    /// プレビューを残さないよう選択状態ごと破棄する。
    pub fn preview_failed(&mut self, ticket: u64) -> bool {
        if ticket != self.decode_seq || self.is_uploading() {
            return false;
        }
        self.pending = None;
        self.phase = Phase::Empty;
        self.result = None;
        true
    }

    /// 送信開始
    ///
    /// 送信チケットを返す。未選択なら `NoFileSelected`、送信中なら `Busy`。
    pub fn begin_submit(&mut self) -> Result<u64> {
        if self.is_uploading() {
            return Err(Error::Busy);
        }
        if self.pending.is_none() {
            return Err(Error::NoFileSelected);
        }
        self.request_seq += 1;
        self.phase = Phase::Uploading;
        self.result = None;
        Ok(self.request_seq)
    }

    /// 送信完了
    ///
    /// 成功時のみ結果を差し替える。失敗時は部分的な結果を残さない。
    pub fn finish_submit(&mut self, ticket: u64, outcome: Result<ResultView>) -> Completion {
        if ticket != self.request_seq || !self.is_uploading() {
            return Completion::Stale;
        }
        match outcome {
            Ok(view) => {
                self.result = Some(view);
                self.phase = Phase::Showing;
                Completion::Rendered
            }
            Err(error) => {
                self.result = None;
                self.phase = if self.preview_src().is_some() {
                    Phase::PreviewReady
                } else {
                    Phase::Empty
                };
                Completion::Failed(error)
            }
        }
    }

    /// 最初の状態に戻す（読み込み中・送信中の完了通知は無効になる）
    pub fn reset(&mut self) {
        self.decode_seq += 1;
        self.request_seq += 1;
        self.pending = None;
        self.phase = Phase::Empty;
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProcessResponse;
    use serde_json::json;

    fn sample_view() -> ResultView {
        let payload = json!({"tesseract": {"data": {"product_name": "VaxA"}}});
        ResultView::from_response(&ProcessResponse::from_value(&payload))
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        let ticket = session.select_file("vial.jpg", "image/jpeg", 1024).expect("選択失敗");
        assert!(session.preview_loaded(ticket, "data:image/jpeg;base64,AAAA".into()));
        session
    }

    #[test]
    fn test_initial_panels() {
        let session = Session::new();
        assert_eq!(
            session.panels(),
            Panels { upload_card: true, image_preview: false, loading: false, results: false }
        );
    }

    #[test]
    fn test_rejected_file_leaves_state_unchanged() {
        let mut session = ready_session();
        let before = session.clone();

        let err = session.select_file("anim.gif", "image/gif", 10).unwrap_err();
        assert_eq!(err.user_message(), "รองรับเฉพาะไฟล์ JPG และ PNG เท่านั้น");
        assert_eq!(session, before);

        let err = session.select_file("big.png", "image/png", 5 * 1024 * 1024 + 1).unwrap_err();
        assert_eq!(err.user_message(), "ไฟล์ต้องไม่เกิน 5MB");
        assert_eq!(session, before);
    }

    #[test]
    fn test_accepted_file_shows_preview_hides_results() {
        let session = ready_session();
        assert_eq!(session.phase(), Phase::PreviewReady);
        assert!(!session.preview_src().unwrap_or_default().is_empty());
        assert_eq!(
            session.panels(),
            Panels { upload_card: false, image_preview: true, loading: false, results: false }
        );
    }

    #[test]
    fn test_new_selection_replaces_pending_and_hides_results() {
        let mut session = ready_session();
        let ticket = session.begin_submit().expect("送信開始失敗");
        session.finish_submit(ticket, Ok(sample_view()));
        assert!(session.panels().results);

        let ticket = session.select_file("other.png", "image/png", 2048).expect("選択失敗");
        assert_eq!(session.pending().map(|p| p.name.as_str()), Some("other.png"));
        assert!(!session.panels().results);
        assert!(session.preview_loaded(ticket, "data:image/png;base64,BBBB".into()));
    }

    #[test]
    fn test_decode_failure_clears_preview() {
        let mut session = ready_session();
        let ticket = session.select_file("broken.jpg", "image/jpeg", 100).expect("選択失敗");
        assert!(session.preview_failed(ticket));
        assert!(session.pending().is_none());
        assert!(session.preview_src().is_none());
        assert!(session.panels().upload_card);
    }

    #[test]
    fn test_stale_decode_ignored() {
        let mut session = Session::new();
        let first = session.select_file("a.jpg", "image/jpeg", 1).expect("選択失敗");
        let second = session.select_file("b.jpg", "image/jpeg", 1).expect("選択失敗");
        assert!(!session.preview_loaded(first, "data:a".into()));
        assert!(!session.preview_failed(first));
        assert!(session.preview_loaded(second, "data:b".into()));
        assert_eq!(session.preview_src(), Some("data:b"));
    }

    #[test]
    fn test_submit_without_file() {
        let mut session = Session::new();
        let err = session.begin_submit().unwrap_err();
        assert!(matches!(err, Error::NoFileSelected));
        assert_eq!(err.user_message(), "กรุณาเลือกไฟล์");
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn test_double_submit_blocked() {
        let mut session = ready_session();
        let ticket = session.begin_submit().expect("送信開始失敗");
        assert!(session.panels().loading);
        assert!(matches!(session.begin_submit(), Err(Error::Busy)));
        assert!(matches!(session.select_file("c.jpg", "image/jpeg", 1), Err(Error::Busy)));

        assert!(matches!(session.finish_submit(ticket, Ok(sample_view())), Completion::Rendered));
        let panels = session.panels();
        assert!(!panels.loading);
        assert!(panels.results);
    }

    #[test]
    fn test_server_error_hides_loading_without_results() {
        let mut session = ready_session();
        let ticket = session.begin_submit().expect("送信開始失敗");
        let outcome = Err(Error::Server { status: 500, detail: "boom".into() });

        match session.finish_submit(ticket, outcome) {
            Completion::Failed(error) => assert!(error.user_message().contains("500")),
            other => panic!("Failedを期待: {:?}", other),
        }
        let panels = session.panels();
        assert!(!panels.loading);
        assert!(!panels.results);
        assert!(panels.image_preview);
        assert_eq!(session.phase(), Phase::PreviewReady);

        // 再送信できる
        assert!(session.begin_submit().is_ok());
    }

    #[test]
    fn test_reset_invalidates_inflight_request() {
        let mut session = ready_session();
        let ticket = session.begin_submit().expect("送信開始失敗");
        session.reset();
        assert!(matches!(session.finish_submit(ticket, Ok(sample_view())), Completion::Stale));
        assert!(session.result().is_none());
        assert!(session.panels().upload_card);
    }

    #[test]
    fn test_resubmit_replaces_result() {
        let mut session = ready_session();
        let ticket = session.begin_submit().expect("送信開始失敗");
        session.finish_submit(ticket, Ok(sample_view()));
        let first = session.result().cloned();

        let ticket = session.begin_submit().expect("送信開始失敗");
        assert!(session.result().is_none());
        session.finish_submit(ticket, Ok(sample_view()));
        assert_eq!(session.result().cloned(), first);
    }
}
