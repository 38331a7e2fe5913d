//! Index arithmetic for the gallery lightbox. Navigation wraps around at both ends.

/// Index of the image before `current`, wrapping to the last image.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

/// Index of the image after `current`, wrapping to the first image.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}
