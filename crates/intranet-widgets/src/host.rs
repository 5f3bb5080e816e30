//! Optional page-builder host integration.
//!
//! Components render both inside an editing host (selection ring, drag
//! affordances) and standalone. Rather than probing for a host and catching
//! the failure, the host is an explicit capability the caller injects; absent
//! a host, every operation is a no-op.

/// Editing capabilities a hosting page-builder can provide.
///
/// All methods default to no-ops so a host only implements what it supports.
pub trait EditorHost {
    /// Whether the component is currently selected in the editor.
    fn is_selected(&self, component_id: &str) -> bool {
        let _ = component_id;
        false
    }

    /// Notify the host that the component was clicked/focused.
    fn select(&self, component_id: &str) {
        let _ = component_id;
    }

    /// Notify the host that a drag started on the component.
    fn begin_drag(&self, component_id: &str) {
        let _ = component_id;
    }
}

/// The read-only fallback used outside an editing host.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl EditorHost for NoopHost {}

/// Borrowed handle widgets carry; `None` means no host is present.
#[derive(Clone, Copy, Default)]
pub struct HostContext<'a> {
    host: Option<&'a dyn EditorHost>,
}

impl<'a> HostContext<'a> {
    /// Context bound to a live editing host.
    pub fn new(host: &'a dyn EditorHost) -> Self {
        Self { host: Some(host) }
    }

    /// Context with no host: selection and drag become no-ops.
    pub fn detached() -> Self {
        Self { host: None }
    }

    pub fn is_selected(&self, component_id: &str) -> bool {
        self.host.is_some_and(|h| h.is_selected(component_id))
    }

    pub fn select(&self, component_id: &str) {
        if let Some(host) = self.host {
            host.select(component_id);
        }
    }

    pub fn begin_drag(&self, component_id: &str) {
        if let Some(host) = self.host {
            host.begin_drag(component_id);
        }
    }
}

impl std::fmt::Debug for HostContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext")
            .field("attached", &self.host.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingHost {
        selected: String,
        log: RefCell<Vec<String>>,
    }

    impl EditorHost for RecordingHost {
        fn is_selected(&self, component_id: &str) -> bool {
            component_id == self.selected
        }

        fn select(&self, component_id: &str) {
            self.log.borrow_mut().push(component_id.to_string());
        }
    }

    #[test]
    fn detached_context_is_inert() {
        let ctx = HostContext::detached();
        assert!(!ctx.is_selected("banner"));
        ctx.select("banner");
        ctx.begin_drag("banner");
    }

    #[test]
    fn attached_context_forwards_to_host() {
        let host = RecordingHost {
            selected: "news".into(),
            log: RefCell::new(Vec::new()),
        };
        let ctx = HostContext::new(&host);

        assert!(ctx.is_selected("news"));
        assert!(!ctx.is_selected("banner"));

        ctx.select("news");
        assert_eq!(host.log.borrow().as_slice(), ["news".to_string()]);
    }
}
