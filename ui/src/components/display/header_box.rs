use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct HeaderBoxProps {
    pub title: String,
    pub subtext: String,
    /// Optional user name appended to the title, greeting style
    #[props(default)]
    pub user: Option<String>,
}

#[component]
pub fn HeaderBox(props: HeaderBoxProps) -> Element {
    rsx! {
        header {
            class: "header-box",
            h1 {
                class: "header-box-title",
                "{props.title}"
                if let Some(user) = &props.user {
                    span {
                        class: "header-box-user",
                        ", {user}"
                    }
                }
            }
            p {
                class: "header-box-subtext",
                "{props.subtext}"
            }
        }
    }
}
