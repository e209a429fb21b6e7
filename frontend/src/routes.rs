use dioxus::prelude::*;

use crate::pages::dashboard_page::DashboardPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    DashboardPage {},
}
