use yew::prelude::*;

const LOGO: &str = "https://logos-download.com/wp-content/uploads/2019/06/Royal_Enfield_Logo_full-3000x3000.png";

#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader-screen">
            <div class="loader-content">
                <img class="loader-logo" src={LOGO} alt="Royal Enfield Logo" />
                <div class="loader-spinner"></div>
                <p class="loader-text">{"Loading the experience..."}</p>
            </div>
            <style>
                {r#"
                .loader-screen {
                    height: 100vh;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: black;
                }
                .loader-content {
                    text-align: center;
                    animation: fadeIn 0.5s ease-out;
                }
                .loader-logo {
                    width: 8rem;
                    margin: 0 auto 1rem;
                    display: block;
                    animation: dropIn 0.5s ease-out 0.3s both;
                }
                .loader-spinner {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto;
                    border-radius: 50%;
                    border-top: 4px solid #b91c1c;
                    animation: spin 1s linear infinite;
                }
                .loader-text {
                    margin-top: 1rem;
                    color: #a1a1aa;
                    animation: fadeIn 0.5s ease-out 0.5s both;
                }
                @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
                @keyframes dropIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
        </div>
    }
}
