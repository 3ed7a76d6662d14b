use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Toggle state for buttons used as a segmented control.
    /// `None` omits `aria-pressed` entirely.
    #[props(default)]
    pub pressed: Option<bool>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Console button. Renders `data-style` from the variant so the stylesheet
/// can theme it.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    if let Some(pressed) = props.pressed {
        base.push(Attribute::new(
            "aria-pressed",
            if pressed { "true" } else { "false" },
            None,
            false,
        ));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
