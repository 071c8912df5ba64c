use dioxus::prelude::*;

use crate::context::{get_settings, AnimationClock, LayoutEpoch};
use crate::pages::Showcase;
use crate::theme::GLOBAL_STYLES;

/// Logs image and script load failures inside the webview without
/// interrupting the page.
const RESOURCE_ERROR_LISTENER: &str = r#"
window.addEventListener('error', (e) => {
    const target = e.target;
    if (target && (target.tagName === 'IMG' || target.tagName === 'SCRIPT')) {
        dioxus.send(target.src || '');
    }
}, true);
"#;

/// Root application component.
///
/// Provides global styles, showcase context, and the resource error reporter.
#[component]
pub fn App() -> Element {
    use_context_provider(get_settings);
    use_context_provider(AnimationClock::new);
    use_context_provider(|| Signal::new(None::<usize>));
    use_context_provider(|| Signal::new(LayoutEpoch::default()));

    // Forward resource load failures to the log
    use_future(|| async {
        let mut listener = document::eval(RESOURCE_ERROR_LISTENER);
        while let Ok(src) = listener.recv::<String>().await {
            tracing::error!("Resource failed to load: {}", src);
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Showcase {}
    }
}
