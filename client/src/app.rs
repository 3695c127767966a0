//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::pages::{
    customers::CustomersPage, dashboard::DashboardPage, edit_customer::EditCustomerPage, insurers::InsurersPage,
    market::MarketPage, needs_analysis::NeedsAnalysisPage, new_customer::NewCustomerPage, products::ProductsPage,
    recommendations::RecommendationsPage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared view state and sets up client-side routing; each
/// menu section is its own route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/advisor-web.css"/>
        <Title text="Advisor Desk"/>

        <Router>
            <div class="app-layout">
                <Sidebar/>
                <main class="app-layout__main">
                    <Routes fallback=|| view! { <p class="page">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=(StaticSegment("customers"), StaticSegment("new")) view=NewCustomerPage/>
                        <Route path=StaticSegment("customers") view=CustomersPage/>
                        <Route
                            path=(StaticSegment("customers"), ParamSegment("id"), StaticSegment("edit"))
                            view=EditCustomerPage
                        />
                        <Route
                            path=(StaticSegment("customers"), ParamSegment("id"), StaticSegment("needs-analysis"))
                            view=NeedsAnalysisPage
                        />
                        <Route
                            path=(StaticSegment("customers"), ParamSegment("id"), StaticSegment("recommendations"))
                            view=RecommendationsPage
                        />
                        <Route path=StaticSegment("products") view=ProductsPage/>
                        <Route path=StaticSegment("market") view=MarketPage/>
                        <Route path=StaticSegment("insurers") view=InsurersPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
