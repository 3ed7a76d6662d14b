use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Header row. Children are `DataTableColumn`s rendered inside `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row; becomes clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = false)] highlighted: bool,
    children: Element,
) -> Element {
    let mut class = String::from("data-table-row");
    if onclick.is_some() {
        class.push_str(" clickable");
    }
    if highlighted {
        class.push_str(" highlighted");
    }
    rsx! {
        tr {
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
