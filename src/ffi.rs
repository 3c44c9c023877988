//! C ABI over `app::pipeline`, for embedding the converter in a host page or
//! another language runtime.
//!
//! Every function takes NUL-terminated UTF-8 strings (null = absent) and
//! returns a newly allocated NUL-terminated string that the caller owns and
//! must release with [`tabtex_free_string`]. A null return means the output
//! could not be handed over (interior NUL).

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use crate::app::pipeline;

/// Borrow a caller string; null or non-UTF-8 input reads as absent.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn borrow<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn hand_over(out: String) -> *mut c_char {
    match CString::new(out) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_latex(input: *const c_char) -> *mut c_char {
    hand_over(pipeline::latex(unsafe { borrow(input) }))
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_latex_rounded(
    input: *const c_char,
    decimals: c_int,
) -> *mut c_char {
    hand_over(pipeline::latex_rounded(unsafe { borrow(input) }, decimals))
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_latex_sig_figs(
    input: *const c_char,
    sig_figs: c_int,
) -> *mut c_char {
    hand_over(pipeline::latex_sig_figs(unsafe { borrow(input) }, sig_figs))
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_csv(input: *const c_char) -> *mut c_char {
    hand_over(pipeline::csv(unsafe { borrow(input) }))
}

/// # Safety
/// Every pointer must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_tikz(
    input: *const c_char,
    filename: *const c_char,
    sig_figs: c_int,
    legend_pos: *const c_char,
    scale: *const c_char,
) -> *mut c_char {
    unsafe {
        hand_over(pipeline::tikz(
            borrow(input),
            borrow(filename),
            sig_figs,
            borrow(legend_pos),
            borrow(scale),
        ))
    }
}

/// # Safety
/// Every pointer must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_tikz_preview(
    input: *const c_char,
    sig_figs: c_int,
    legend_pos: *const c_char,
    scale: *const c_char,
) -> *mut c_char {
    unsafe {
        hand_over(pipeline::tikz_preview(
            borrow(input),
            sig_figs,
            borrow(legend_pos),
            borrow(scale),
        ))
    }
}

/// # Safety
/// Every pointer must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_tikz_with_regression(
    input: *const c_char,
    filename: *const c_char,
    sig_figs: c_int,
    legend_pos: *const c_char,
    scale: *const c_char,
    model: *const c_char,
) -> *mut c_char {
    unsafe {
        hand_over(pipeline::tikz_with_regression(
            borrow(input),
            borrow(filename),
            sig_figs,
            borrow(legend_pos),
            borrow(scale),
            borrow(model),
        ))
    }
}

/// # Safety
/// Every pointer must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_tikz_with_regression_preview(
    input: *const c_char,
    sig_figs: c_int,
    legend_pos: *const c_char,
    scale: *const c_char,
    model: *const c_char,
) -> *mut c_char {
    unsafe {
        hand_over(pipeline::tikz_with_regression_preview(
            borrow(input),
            sig_figs,
            borrow(legend_pos),
            borrow(scale),
            borrow(model),
        ))
    }
}

/// # Safety
/// `input` and `model` must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_regression(
    input: *const c_char,
    x_col: c_int,
    y_col: c_int,
    model: *const c_char,
) -> *mut c_char {
    unsafe { hand_over(pipeline::regression(borrow(input), x_col, y_col, borrow(model))) }
}

/// # Safety
/// `input` and `model` must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_all_regressions(
    input: *const c_char,
    model: *const c_char,
) -> *mut c_char {
    unsafe { hand_over(pipeline::all_regressions(borrow(input), borrow(model))) }
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_regression_comparison(
    input: *const c_char,
    x_col: c_int,
    y_col: c_int,
) -> *mut c_char {
    hand_over(pipeline::regression_comparison(unsafe { borrow(input) }, x_col, y_col))
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_linear_regression(
    input: *const c_char,
    x_col: c_int,
    y_col: c_int,
) -> *mut c_char {
    hand_over(pipeline::linear_regression(unsafe { borrow(input) }, x_col, y_col))
}

/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_all_linear_regressions(input: *const c_char) -> *mut c_char {
    hand_over(pipeline::all_linear_regressions(unsafe { borrow(input) }))
}

/// Release a string returned by any `tabtex_*` function. Null is ignored.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by this library and not
/// yet freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tabtex_free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: produced by `CString::into_raw` in `hand_over`.
    drop(unsafe { CString::from_raw(ptr) });
}
