//! Promotion Carousel Component
//!
//! Slide strip moved with translateX; auto-advances and restarts its timer
//! on every manual navigation.

use leptos::prelude::*;
use leptos_carousel::use_carousel;

use crate::catalog;
use crate::config::use_config;

#[component]
pub fn PromoCarousel() -> impl IntoView {
    let config = use_config();
    let slides = catalog::slides();
    let carousel = use_carousel(slides.len(), config.carousel_interval_ms);

    view! {
        <section class="carousel">
            <div
                class="carousel-inner"
                id="carousel-inner"
                style=move || format!("transform: translateX(-{}%);", carousel.index() * 100)
            >
                {slides.iter().map(|slide| view! {
                    <div
                        class="carousel-slide"
                        style=format!("background-image: url('{}');", slide.image)
                    >
                        <div class="carousel-caption">
                            <h3>{slide.title}</h3>
                            <p>{slide.text}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <button class="carousel-prev" on:click=move |_| carousel.prev()>"❮"</button>
            <button class="carousel-next" on:click=move |_| carousel.next()>"❯"</button>

            <div class="carousel-indicators" id="carousel-indicators">
                {(0..slides.len()).map(|i| view! {
                    <span
                        class=move || if carousel.index() == i { "indicator active" } else { "indicator" }
                        on:click=move |_| carousel.go_to(i)
                    ></span>
                }).collect_view()}
            </div>
        </section>
    }
}
