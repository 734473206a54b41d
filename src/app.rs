mod avatar;
mod background;
mod chat;
mod contact;
mod dom;
mod footer;
mod header;
mod homepage;
mod logo;
mod projects;
mod resume;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{navigation::NavConfig, theme::provide_theme};

use chat::ChatSupport;
use footer::Footer;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();
    provide_context(NavConfig::default());

    view! {
        <Title formatter=|title| format!("Nihar Patel - {title}") />
        <Meta name="color-scheme" content=move || theme.mode().as_str() />

        <Router>
            <div
                class=move || format!("app-container min-h-screen bg-[var(--bg-default)] text-[var(--text-primary)] transition-colors duration-300 {}", theme.mode())
                style=move || theme.mode().palette().css_vars()
            >
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <ChatSupport />
            </div>
        </Router>
    }
}
