pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves `index` forward by `step`, stopping at the last row.
pub const fn step_down(index: usize, step: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let target = index + step;
    if target >= len {
        len - 1
    } else {
        target
    }
}
