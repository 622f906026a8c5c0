use crate::core::render::escape_html;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// 錯誤提示顯示時間
pub const NOTICE_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

impl Notice {
    pub fn render_html(&self) -> String {
        format!(
            r#"<div class="error-alert" data-notice-id="{}">
    <div style="background: #f8d7da; color: #721c24; padding: 15px; border-radius: 10px; border: 1px solid #f5c6cb; margin: 20px; text-align: center; font-weight: 500;">
        <i class="fas fa-exclamation-circle"></i> {}
    </div>
</div>"#,
            self.id,
            escape_html(&self.message)
        )
    }
}

#[derive(Debug, Default)]
struct BoardState {
    next_id: u64,
    notices: Vec<Notice>,
}

/// Transient error banners. Every posted notice removes itself once its
/// ttl has elapsed.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    state: Arc<Mutex<BoardState>>,
    ttl: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(BoardState::default())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn post(&self, message: impl Into<String>) -> u64 {
        let id = {
            let mut state = self.lock();
            state.next_id += 1;
            let id = state.next_id;
            state.notices.push(Notice {
                id,
                message: message.into(),
            });
            id
        };

        // 截止時間在 post 時決定，不受排程延遲影響
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let deadline = tokio::time::Instant::now() + self.ttl;
                let board = self.clone();
                handle.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    board.dismiss(id);
                });
            }
            Err(_) => {
                tracing::warn!("No async runtime; notice {} stays until dismissed", id);
            }
        }

        id
    }

    pub fn dismiss(&self, id: u64) -> bool {
        let mut state = self.lock();
        let before = state.notices.len();
        state.notices.retain(|n| n.id != id);
        let removed = state.notices.len() != before;
        if removed {
            tracing::debug!("Notice {} dismissed", id);
        }
        removed
    }

    pub fn active(&self) -> Vec<Notice> {
        self.lock().notices.clone()
    }

    pub fn render_html(&self) -> String {
        self.active()
            .iter()
            .map(Notice::render_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
