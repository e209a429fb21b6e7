//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:#F56565; font-size: 54px; border: 1px solid #F56565; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Erreur",
                    }
                    p {
                        style: "color:#FEB2B2; font-size: 26px; border: 1px solid #F56565; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:#63B3ED; font-size: 26px; border: 1px solid #63B3ED; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Retour au tableau de bord"
                    }
                    pre {
                        style: "color:#E2E8F0; border: 1px solid #F56565; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}
