use crate::utils::error::DemoError;

/// 已收到的 HTTP 回應資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub content_type: Option<String>,
}

/// 單一 GET 請求的結果：錯誤、回應資訊、內容
///
/// 傳輸失敗時 `response` 與 `body` 皆為空；讀取內容失敗時保留 `response` 並設定 `error`
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub error: Option<DemoError>,
    pub response: Option<ResponseMeta>,
    pub body: Option<String>,
}

impl FetchOutcome {
    pub fn failed(error: DemoError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }

    /// 輸出三行：錯誤、狀態碼、內容
    pub fn report_lines(&self) -> [String; 3] {
        let error = self
            .error
            .as_ref()
            .map_or_else(|| "none".to_string(), |e| e.to_string());
        let status = self
            .status_code()
            .map_or_else(|| "none".to_string(), |s| s.to_string());
        let body = self.body.as_deref().unwrap_or("none");

        [
            format!("error: {}", error),
            format!("statusCode: {}", status),
            format!("body: {}", body),
        ]
    }
}
