//! # intranet-widgets
//!
//! Reusable TUI components for the corporate intranet applications.
//!
//! This crate provides the building blocks the intranet apps share, ensuring
//! a consistent look across the suite.
//!
//! ## Components
//!
//! - [`OrgStructure`] - Expandable tree of company areas with a tabbed detail panel
//! - [`FolderBrowser`] - Folder tree with breadcrumb navigation and document search
//! - [`HeroBanner`] - Highlight strip with headline, badge, and call to action
//! - [`NewsFeed`] - Latest news with author, date, and engagement stats
//! - [`AnnouncementCard`] / [`BirthdayCard`] / [`QuickAccessCard`] - Dashboard cards
//! - [`DepartmentSelector`] - Currently selected department with stats
//!
//! ## Architecture
//!
//! Interactive widgets split state from rendering: a plain state struct owns
//! selection, expansion, and scroll position and handles key events, while a
//! borrowing widget implements Ratatui's `StatefulWidget`. Display-only widgets
//! implement `Widget` and are configured through builder methods whose defaults
//! are documented in [`catalog()`].
//!
//! Widgets can run standalone or inside an editor host; see [`HostContext`].

mod banner;
mod browser;
mod cards;
pub mod catalog;
mod host;
pub mod model;
mod news;
mod org;
mod selector;
mod text;

pub use banner::{BannerVariant, HeroBanner};
pub use browser::{
    filter_documents, BrowserRow, BrowserState, FolderBrowser, NavError, PathNavigator,
    PathSegment, ViewMode,
};
pub use cards::{
    AnnouncementCard, BirthdayCard, CardLayout, CardVariant, CelebrationVariant, QuickAccessCard,
};
pub use catalog::{catalog, ComponentSpec, PropSpec, PropValue};
pub use host::{EditorHost, HostContext, NoopHost};
pub use news::{FeedVariant, NewsFeed};
pub use org::{DetailTab, OrgBrowserState, OrgPane, OrgStructure, UnitRow};
pub use selector::{DepartmentSelector, SelectorLayout};
