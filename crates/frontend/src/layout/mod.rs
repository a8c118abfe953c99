pub mod global_context;
pub mod navbar;
pub mod sidebar;

use crate::pages::Pages;
use leptos::prelude::*;
use navbar::Navbar;
use sidebar::Sidebar;

/// Page shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |  Navbar                      |
/// | (profile, |------------------------------|
/// |  contacts)|  active page                 |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <main>
            <Sidebar />
            <div class="main-content">
                <Navbar />
                <Pages />
            </div>
        </main>
    }
}
