use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::core::DecodeError;

/// One emoji per byte value, in byte order.
#[rustfmt::skip]
const ALPHABET: [char; 256] = [
    '🚀', '🪐', '☄', '🛰', '🌌', '🌑', '🌒', '🌓', '🌔', '🌕', '🌖', '🌗', '🌘', '🌍', '🌏', '🌎',
    '🐉', '☀', '💻', '🖥', '💾', '💿', '😂', '❤', '😍', '🤣', '😊', '🙏', '💕', '😭', '😘', '👍',
    '😅', '👏', '😁', '🔥', '🥰', '💔', '💖', '💙', '😢', '🤔', '😆', '🙄', '💪', '😉', '☺', '👌',
    '🤗', '💜', '😔', '😎', '😇', '🌹', '🤦', '🎉', '💞', '✌', '✨', '🤷', '😱', '😌', '🌸', '🙌',
    '😋', '💗', '💚', '😏', '💛', '🙂', '💓', '🤩', '😄', '😀', '🖤', '😃', '💯', '🙈', '👇', '🎶',
    '😒', '🤭', '❣', '😜', '💋', '👀', '😪', '😑', '💥', '🙋', '😞', '😩', '😡', '🤪', '👊', '🥳',
    '😥', '🤤', '👉', '💃', '😳', '✋', '😚', '😝', '😴', '🌟', '😬', '🙃', '🍀', '🌷', '😻', '😓',
    '⭐', '✅', '🥺', '🌈', '😈', '🤘', '💦', '✔', '😣', '🏃', '💐', '☹', '🎊', '💘', '😠', '☝',
    '😕', '🌺', '🎂', '🌻', '😐', '🖕', '💝', '🙊', '😹', '🗣', '💫', '💀', '👑', '🎵', '🤞', '😛',
    '🔴', '😤', '🌼', '😫', '⚽', '🤙', '☕', '🏆', '🤫', '👈', '😮', '🙆', '🍻', '🍃', '🐶', '💁',
    '😲', '🌿', '🧡', '🎁', '⚡', '🌞', '🎈', '❌', '✊', '👋', '😰', '🤨', '😶', '🤝', '🚶', '💰',
    '🍓', '💢', '🤟', '🙁', '🚨', '💨', '🤬', '✈', '🎀', '🍺', '🤓', '😙', '💟', '🌱', '😖', '👶',
    '🥴', '▶', '➡', '❓', '💎', '💸', '⬇', '😨', '🌚', '🦋', '😷', '🕺', '⚠', '🙅', '😟', '😵',
    '👎', '🤲', '🤠', '🤧', '📌', '🔵', '💅', '🧐', '🐾', '🍒', '😗', '🤑', '🌊', '🤯', '🐷', '☎',
    '💧', '😯', '💆', '👆', '🎤', '🙇', '🍑', '❄', '🌴', '💣', '🐸', '💌', '📍', '🥀', '🤢', '👅',
    '💡', '💩', '👐', '📸', '👻', '🤐', '🤮', '🎼', '🥵', '🚩', '🍎', '🍊', '👼', '💍', '📣', '🥂',
];

/// Maps each alphabet emoji back to its byte value.
static INDEX: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(idx, &c)| (c, idx as u8))
        .collect()
});

pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = String::with_capacity(data.len() * 4);
    for &b in data {
        out.push(ALPHABET[b as usize]);
    }
    out.into_bytes()
}

pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let text = std::str::from_utf8(input).map_err(|e| {
        let offset = e.valid_up_to();
        DecodeError::InvalidByte {
            offset,
            byte: input[offset],
        }
    })?;

    let mut result = Vec::with_capacity(text.len() / 4);
    for (offset, c) in text.char_indices() {
        match INDEX.get(&c) {
            Some(&b) => result.push(b),
            None => return Err(DecodeError::InvalidSymbol { offset }),
        }
    }
    Ok(result)
}
