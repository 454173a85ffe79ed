// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod category_repo;
pub mod publishers;
pub mod time;
pub mod transport;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// ユーティリティ関連
pub use util::{FixedClock, TestSlug};

// リポジトリ関連
pub use article_repos::{InMemoryArticleRepo, StaleReadRepo};
pub use category_repo::InMemoryCategoryRepo;

// 公開先・HTTP 関連
pub use publishers::{PanickingPublisher, SlowPublisher, StubPublisher};
pub use transport::{ScriptedTransport, json_response};
