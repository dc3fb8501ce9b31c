use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SearchBarProps {
    pub value: String,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(p: &SearchBarProps) -> Html {
    let is_shown = use_state(|| !p.value.is_empty());
    let toggle_shown = {
        let is_shown = is_shown.clone();
        Callback::from(move |_| is_shown.set(!*is_shown))
    };
    let is_shown = is_shown.then(|| "search-bar-shown");
    let on_input = p.on_search.reform(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    html! {
        <div class="flex-fill">
            <div class={classes!("search-bar", "m-3", is_shown)}>
                <button
                    type="button"
                    class="btn btn-light btn-circle bi-btn bi-search fs-6"
                    title="Search"
                    onclick={toggle_shown}
                >
                </button>
                <div class="search-bar-input">
                    <input
                        type="text"
                        class="w-100 h-100 px-3"
                        placeholder="Search for ideas, topics, or tags..."
                        value={p.value.clone()}
                        oninput={on_input}
                    />
                </div>
            </div>
        </div>
    }
}
