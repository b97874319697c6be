//! Function composition operators

/// Identity function
pub fn identity<T>(x: T) -> T {
    x
}

/// Composes `g` after `f`, so `compose(g, f)(a) == g(f(a))`
pub fn compose<A, B, C, G, F>(g: G, f: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}
