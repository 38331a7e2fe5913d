use dioxus::prelude::*;

/// Checks a newsletter signup locally. Nothing is sent to the server.
pub fn subscribe_message(email: &str) -> &'static str {
    if email.trim().is_empty() {
        "Please enter your email."
    } else {
        "Thanks for subscribing!"
    }
}

#[component]
pub fn SubscribeForm() -> Element {
    let mut email = use_signal(String::new);
    let mut message = use_signal(|| None::<&'static str>);

    rsx!(form {
        class: "flex flex-col items-center gap-2 max-w-md mx-auto",
        onsubmit: move |evt: FormEvent| {
            evt.prevent_default();
            let accepted = !email().trim().is_empty();
            message.set(Some(subscribe_message(&email())));
            if accepted {
                email.set(String::new());
            }
        },
        div {
            class: "flex justify-center gap-4 w-full",
            input {
                class: "input flex-1 text-gray-900",
                r#type: "email",
                placeholder: "Enter your email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            button {
                class: "btn",
                r#type: "submit",
                "Subscribe"
            }
        }
        if let Some(message) = message() {
            p { class: "text-sm text-white/80 mt-2", "{message}" }
        }
    })
}
