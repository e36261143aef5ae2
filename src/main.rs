use yew::prelude::*;
use log::{info, Level};
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

mod config;
mod components {
    pub mod notification;
    pub mod subscribe;
}
mod hooks {
    pub mod scroll_reveal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

// Section ids in document order, paired with their nav labels. The scroll
// tracker probes these top to bottom and the first containing section wins.
pub const SECTIONS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("subscribe", "Subscribe"),
    ("about", "About"),
    ("location", "Location"),
    ("accommodation", "Stay"),
    ("food", "Food"),
    ("included", "Included"),
    ("contact", "Contact"),
];

// The probe sits below the fixed navbar, not at the viewport top.
const SECTION_SCROLL_OFFSET: f64 = 100.0;

fn section_at_offset(spans: &[(&'static str, f64, f64)], offset: f64) -> Option<&'static str> {
    spans
        .iter()
        .find(|(_, top, height)| offset >= *top && offset < top + height)
        .map(|(id, _, _)| *id)
}

fn scroll_to_section(id: &str) {
    if let Some(window) = window() {
        if let Some(document) = window.document() {
            if let Some(element) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active_section = use_state_eq(|| SECTIONS[0].0.to_string());

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_pos = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_pos > 40.0);

                    let spans: Vec<(&'static str, f64, f64)> = SECTIONS
                        .iter()
                        .filter_map(|&(id, _)| {
                            document
                                .get_element_by_id(id)
                                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                                .map(|el| (id, el.offset_top() as f64, el.offset_height() as f64))
                        })
                        .collect();

                    // No hit keeps the previous section highlighted.
                    if let Some(section) =
                        section_at_offset(&spans, scroll_pos + SECTION_SCROLL_OFFSET)
                    {
                        active_section.set(section.to_string());
                    }
                }) as Box<dyn FnMut()>)
            };

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            // Seed the state from wherever the page loaded, e.g. a #fragment.
            scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_to_section = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to_section(id);
            })
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" href="#hero" onclick={nav_to_section("hero")}>
                    {"Lumi Soulscape"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for SECTIONS.iter().skip(1).map(|&(id, label)| html! {
                            <a
                                class={classes!("nav-link", (*active_section == id).then(|| "active"))}
                                href={format!("#{}", id)}
                                onclick={nav_to_section(id)}
                            >
                                {label}
                            </a>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(250, 247, 242, 0.95);
                    box-shadow: 0 2px 12px rgba(51, 66, 59, 0.12);
                }

                .nav-content {
                    max-width: 1080px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    color: #fffdf9;
                    font-size: 1.2rem;
                    letter-spacing: 0.08em;
                    text-decoration: none;
                }

                .top-nav.scrolled .nav-logo {
                    color: #33423b;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: rgba(255, 253, 249, 0.85);
                    font-size: 0.95rem;
                    text-decoration: none;
                    padding-bottom: 2px;
                    border-bottom: 2px solid transparent;
                    transition: color 0.2s ease, border-color 0.2s ease;
                }

                .nav-link:hover {
                    color: #fffdf9;
                }

                .nav-link.active {
                    color: #fffdf9;
                    border-bottom-color: #e8b04b;
                }

                .top-nav.scrolled .nav-link {
                    color: rgba(51, 66, 59, 0.75);
                }

                .top-nav.scrolled .nav-link:hover,
                .top-nav.scrolled .nav-link.active {
                    color: #33423b;
                }

                .top-nav.scrolled .nav-link.active {
                    border-bottom-color: #5e8b6b;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    padding: 6px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    border-radius: 2px;
                    background: #fffdf9;
                }

                .top-nav.scrolled .burger-menu span {
                    background: #33423b;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 1rem 1.5rem 1.5rem;
                        background: rgba(250, 247, 242, 0.98);
                        box-shadow: 0 12px 24px rgba(51, 66, 59, 0.15);
                    }

                    .nav-right.mobile-menu-open .nav-link {
                        color: #33423b;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_spans() -> Vec<(&'static str, f64, f64)> {
        vec![
            ("hero", 0.0, 600.0),
            ("subscribe", 600.0, 400.0),
            ("about", 1000.0, 500.0),
        ]
    }

    #[test]
    fn test_first_matching_section_wins() {
        // Overlapping spans can happen mid-layout; document order decides.
        let spans = vec![("hero", 0.0, 600.0), ("subscribe", 400.0, 400.0)];
        assert_eq!(section_at_offset(&spans, 450.0), Some("hero"));
    }

    #[test]
    fn test_span_bounds_are_half_open() {
        let spans = page_spans();
        assert_eq!(section_at_offset(&spans, 600.0), Some("subscribe"));
        assert_eq!(section_at_offset(&spans, 999.9), Some("subscribe"));
        assert_eq!(section_at_offset(&spans, 1000.0), Some("about"));
    }

    #[test]
    fn test_no_match_returns_none_so_previous_selection_sticks() {
        let spans = page_spans();
        assert_eq!(section_at_offset(&spans, 5000.0), None);
        assert_eq!(section_at_offset(&[], 0.0), None);
    }

    #[test]
    fn test_probe_sits_below_the_navbar() {
        let spans = page_spans();
        assert_eq!(
            section_at_offset(&spans, 520.0 + SECTION_SCROLL_OFFSET),
            Some("subscribe")
        );
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<&str> = SECTIONS.iter().map(|&(id, _)| id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
