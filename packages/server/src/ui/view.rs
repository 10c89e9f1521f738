//! Server-rendered HTML room view.
//!
//! Message bodies, sender names and room names are HTML-escaped. The page
//! reloads itself when the room's WebSocket pushes an event.

use crate::domain::{ChatMessage, Room, RoomName};

/// Maximum number of messages rendered on the room page
pub const PAGE_MESSAGE_LIMIT: usize = 1000;

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the room page as seen by `viewer`.
pub fn render_room_page(
    room: &RoomName,
    viewer: &str,
    rooms: &[Room],
    messages: &[ChatMessage],
) -> String {
    let room_name = escape_html(room.as_str());
    let viewer = escape_html(viewer.trim());

    let room_links: String = rooms
        .iter()
        .map(|r| {
            let name = escape_html(r.name.as_str());
            format!(r#"<li><a class="room-link" data-room="{name}" href="">{name}</a></li>"#)
        })
        .collect();

    let bubbles: String = messages
        .iter()
        .map(|message| render_bubble(message, &viewer))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Room: {room_name}</title>
</head>
<body data-room="{room_name}">
    <aside>
        <h2>Rooms</h2>
        <ul>{room_links}</ul>
    </aside>
    <main>
        <h1>Room: {room_name}</h1>
        <div class="chat-card" id="chatcard">{bubbles}</div>
        <div class="meta" id="typing" hidden>Bot is typing...</div>
        <form id="msg-form">
            <input id="sender" placeholder="Display name" value="{viewer}">
            <input id="text" placeholder="Say hello, try 'help' or 'joke'..." autocomplete="off">
            <button type="submit">Send</button>
        </form>
        <a id="export-link" href="">Export messages (.txt)</a>
    </main>
    <script>
        const room = document.body.dataset.room;
        const viewerParam = () => "?viewer=" + encodeURIComponent(document.getElementById("sender").value);
        for (const link of document.querySelectorAll(".room-link")) {{
            link.href = "/rooms/" + encodeURIComponent(link.dataset.room) + viewerParam();
        }}
        document.getElementById("export-link").href = "/api/rooms/" + encodeURIComponent(room) + "/export";
        const card = document.getElementById("chatcard");
        card.scrollTop = card.scrollHeight;
        document.getElementById("msg-form").addEventListener("submit", async (e) => {{
            e.preventDefault();
            const text = document.getElementById("text").value;
            const sender = document.getElementById("sender").value;
            await fetch("/api/rooms/" + encodeURIComponent(room) + "/messages", {{
                method: "POST",
                headers: {{ "Content-Type": "application/json" }},
                body: JSON.stringify({{ sender, text }}),
            }});
            location.href = "/rooms/" + encodeURIComponent(room) + viewerParam();
        }});
        const scheme = location.protocol === "https:" ? "wss://" : "ws://";
        const socket = new WebSocket(scheme + location.host + "/api/rooms/" + encodeURIComponent(room) + "/ws");
        socket.onmessage = (event) => {{
            const data = JSON.parse(event.data);
            if (data.type === "bot-typing") {{
                document.getElementById("typing").hidden = false;
            }} else {{
                location.href = "/rooms/" + encodeURIComponent(room) + viewerParam();
            }}
        }};
    </script>
</body>
</html>"#
    )
}

fn render_bubble(message: &ChatMessage, viewer: &str) -> String {
    let sender = escape_html(message.sender.as_str());
    let text = escape_html(message.text.as_str());
    let timestamp = message.timestamp;

    let (align, bubble_class) = if sender == viewer {
        ("flex-end", "bubble-user")
    } else {
        ("flex-start", "bubble-bot")
    };

    format!(
        r#"<div style="display:flex;flex-direction:column;align-items:{align};"><div class="{bubble_class}">{sender}: {text}</div><div class="meta">{timestamp}</div></div>"#
    )
}
