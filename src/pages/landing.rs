//! Landing page: every section of the site, in reading order.

use dioxus::prelude::*;

use crate::components::{ComplaintForm, Credibility, Footer, Header, Hero, ScrollToTop};

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "page",
            Header {}
            main {
                Hero {}
                ComplaintForm {}
                Credibility {}
            }
            Footer {}
            ScrollToTop {}
        }
    }
}
