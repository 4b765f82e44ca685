//! tracing 구독자 초기화.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 로그 필터를 읽는 환경 변수 이름.
pub const LOG_ENV: &str = "TEMPCONV_LOG";

static INIT: Once = Once::new();

/// 전역 tracing 구독자를 설치한다. 여러 번 호출해도 처음 한 번만 적용된다.
///
/// `TEMPCONV_LOG`(예: `temperature_converter=debug`)가 있으면 그 값을, 없거나
/// 잘못되었으면 `fallback_filter`를 쓴다. 표준 출력은 결과 표가 쓰므로 로그는
/// 표준 에러로 보낸다.
pub fn init_tracing(fallback_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
