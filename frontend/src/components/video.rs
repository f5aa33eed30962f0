use yew::prelude::*;

const VIDEO_EMBED: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1";
const THUMBNAIL: &str = "/images/video-thumbnail.jpg";

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "⚡",
        "Powerful Performance",
        "Experience the thrill of the 350cc J-series engine, delivering smooth power and responsive handling.",
    ),
    (
        "⏱",
        "Retro Styling",
        "Turn heads with the classic Royal Enfield design, reimagined for the modern urban rider.",
    ),
    (
        "🛡",
        "Modern Features",
        "Dual-channel ABS, digital-analog instrument cluster and LED tail lamp for the everyday ride.",
    ),
];

#[function_component(VideoSection)]
pub fn video_section() -> Html {
    let is_playing = use_state(|| false);

    let on_play = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: MouseEvent| is_playing.set(true))
    };

    html! {
        <section class="video-section" id="video">
            <div class="video-inner">
                <h2 class="section-title">{"Experience the Hunter 350"}</h2>
                <div class="video-frame">
                    {
                        if *is_playing {
                            html! {
                                <iframe
                                    src={VIDEO_EMBED}
                                    title="Royal Enfield Hunter 350 Video"
                                    frameborder="0"
                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                    allowfullscreen={true}
                                ></iframe>
                            }
                        } else {
                            html! {
                                <div class="video-thumbnail">
                                    <img src={THUMBNAIL} alt="Hunter 350 Video Thumbnail" />
                                    <div class="video-overlay">
                                        <button class="play-button" onclick={on_play} aria-label="Play video">{"▶"}</button>
                                    </div>
                                </div>
                            }
                        }
                    }
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .video-section {
                    padding: 4rem 0;
                    background: #18181b;
                }
                .video-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .video-frame {
                    position: relative;
                    border-radius: 8px;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    aspect-ratio: 16 / 9;
                }
                .video-frame iframe, .video-thumbnail img {
                    width: 100%;
                    height: 100%;
                    display: block;
                }
                .video-thumbnail { position: relative; height: 100%; }
                .video-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .play-button {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: #dc2626;
                    color: white;
                    border: none;
                    font-size: 2rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .play-button:hover { transform: scale(1.1); }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .feature-card {
                    background: #27272a;
                    padding: 1.5rem;
                    border-radius: 8px;
                }
                .feature-icon { color: #ef4444; font-size: 2.5rem; margin-bottom: 1rem; }
                .feature-card h3 { font-size: 1.25rem; margin-bottom: 0.5rem; }
                .feature-card p { color: #a1a1aa; }
                "#}
            </style>
        </section>
    }
}
