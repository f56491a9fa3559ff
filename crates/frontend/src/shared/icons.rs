use leptos::prelude::*;

/// Stroke paths (24x24 viewBox) for the icons used in the console.
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "dashboard" => &[
            "M3 3h7v9H3z",
            "M14 3h7v5h-7z",
            "M14 12h7v9h-7z",
            "M3 16h7v5H3z",
        ],
        "products" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04",
            "M12 22V12",
        ],
        "categories" => &[
            "M20.59 13.41 13.42 20.58a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z",
            "M7 7h.01",
        ],
        "orders" => &[
            "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z",
            "M3 6h18",
            "M16 10a4 4 0 0 1-8 0",
        ],
        "customers" => &[
            "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2",
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M23 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "sales" => &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4z",
        ],
        "delete" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
            "M10 11v6",
            "M14 11v6",
        ],
        "refresh" => &[
            "M23 4v6h-6",
            "M1 20v-6h6",
            "M3.51 9a9 9 0 0 1 14.85-3.36L23 10",
            "M1 14l4.64 4.36A9 9 0 0 0 20.49 15",
        ],
        "save" => &[
            "M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z",
            "M17 21v-8H7v8",
            "M7 3v5h8",
        ],
        "cancel" | "x" => &["M18 6 6 18", "M6 6l12 12"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "menu" => &["M3 12h18", "M3 6h18", "M3 18h18"],
        "search" => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
        "sun" => &[
            "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
            "M12 1v2",
            "M12 21v2",
            "M4.22 4.22l1.42 1.42",
            "M18.36 18.36l1.42 1.42",
            "M1 12h2",
            "M21 12h2",
            "M4.22 19.78l1.42-1.42",
            "M18.36 5.64l1.42-1.42",
        ],
        "moon" => &["M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"],
        "star" => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"],
        "reviews" => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        "sparkles" => &[
            "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.4l-1.9-5.8L4 10.7l6.1-1.9z",
            "M19 3v4",
            "M21 5h-4",
        ],
        _ => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 8v4", "M12 16h.01"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let size = match name {
        "chevron-left" | "chevron-right" | "x" => "16",
        _ => "20",
    };
    let paths = icon_paths(name);
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
