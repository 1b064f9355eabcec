use yew::prelude::*;

/// Paper-like backdrop behind both views: base tone, grain, light, vignette.
#[function_component(Background)]
pub fn background() -> Html {
    html! {
        <>
            <style>
                {r#"
                .bg-layer { position: fixed; inset: 0; pointer-events: none; }
                .bg-base { z-index: -20; background-color: #f7f6f3; }
                .bg-grain { z-index: -15; filter: url(#grain); opacity: 0.04; }
                .bg-light {
                    z-index: -10;
                    background:
                        radial-gradient(ellipse 80% 50% at 50% -10%, rgba(255,255,255,0.8) 0%, transparent 60%),
                        radial-gradient(ellipse 60% 40% at 100% 50%, rgba(255,255,255,0.3) 0%, transparent 50%),
                        radial-gradient(ellipse 50% 30% at 0% 80%, rgba(247,246,243,0.5) 0%, transparent 50%);
                }
                .bg-vignette {
                    z-index: -5;
                    background: radial-gradient(ellipse at center, transparent 60%, rgba(0,0,0,0.04) 100%);
                }
                "#}
            </style>
            <div class="bg-layer bg-base"></div>
            <svg style="position: fixed; width: 0; height: 0;">
                <defs>
                    <filter id="grain">
                        <feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="4" stitchTiles="stitch" />
                        <feColorMatrix type="saturate" values="0" />
                    </filter>
                </defs>
            </svg>
            <div class="bg-layer bg-grain"></div>
            <div class="bg-layer bg-light"></div>
            <div class="bg-layer bg-vignette"></div>
        </>
    }
}
