use yew::prelude::*;

use crate::util;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <p>{ format!("© {} Majestor Kepseu. All rights reserved.", util::current_year()) }</p>
            </div>
        </footer>
    }
}
