//! Landing view after login

use crate::components::Menu;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BooksPageProps {
    /// Sub-section from `/books/:section`, `None` for the full catalogue
    #[prop_or_default]
    pub section: Option<String>,
}

fn section_title(section: Option<&str>) -> String {
    match section {
        None => "All books".to_string(),
        Some(section) => section
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[function_component(BooksPage)]
pub fn books_page(props: &BooksPageProps) -> Html {
    html! {
        <>
            <Menu />
            <div class="container mt-4">
                <h2>{ section_title(props.section.as_deref()) }</h2>
            </div>
        </>
    }
}
