use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn position(self) -> &'static str {
        match self {
            Self::TopLeft => "top: -250px; left: -250px;",
            Self::TopRight => "top: -250px; right: -250px;",
            Self::BottomLeft => "bottom: -250px; left: -250px;",
            Self::BottomRight => "bottom: -250px; right: -250px;",
        }
    }
}

/// Slowly pulsing radial glow anchored just outside a corner of its parent.
#[component]
pub fn BackgroundEffect(#[prop(optional)] corner: Corner) -> impl IntoView {
    view! {
        <div
            class="background-glow absolute w-[500px] h-[500px] rounded-full pointer-events-none z-0"
            style=corner.position()
            aria-hidden="true"
        ></div>
    }
}
