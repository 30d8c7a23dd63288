use leptos::prelude::*;
use pronto::links::{self, ChatClient};

use crate::{browser, use_config};

const GREETING: &str = "¡Hola, estoy interesado en ... ";

/// Fixed chat button; app host on phones, web client on desktop.
#[component]
pub fn FloatingChat() -> impl IntoView {
    let config = use_config();
    let client = ChatClient::from_user_agent(&browser::user_agent());
    let href = links::chat_send_link(client, config.chat_phone(), GREETING);

    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="floating-chat"
            aria-label="Chatea con nosotros en WhatsApp"
        >
            <svg width="28" height="28" viewBox="0 0 24 24" aria-hidden="true">
                <path
                    fill="currentColor"
                    d="M12 2a10 10 0 0 0-8.6 15.1L2 22l5-1.3A10 10 0 1 0 12 2zm0 18.2a8.2 8.2 0 0 1-4.2-1.2l-.3-.2-3 .8.8-2.9-.2-.3A8.2 8.2 0 1 1 12 20.2zm4.5-6.1c-.2-.1-1.5-.7-1.7-.8s-.4-.1-.6.1-.7.8-.8 1-.3.2-.5.1a6.7 6.7 0 0 1-3.3-2.9c-.2-.4.2-.4.7-1.3a.5.5 0 0 0 0-.5l-.8-1.9c-.2-.5-.4-.4-.6-.4h-.5a1 1 0 0 0-.7.3 3 3 0 0 0-.9 2.2 5.2 5.2 0 0 0 1.1 2.8 11.9 11.9 0 0 0 4.6 4c1.7.7 2.3.8 3.2.6a2.7 2.7 0 0 0 1.8-1.3 2.2 2.2 0 0 0 .2-1.3c-.1-.1-.3-.2-.5-.3z"
                />
            </svg>
        </a>
    }
}
