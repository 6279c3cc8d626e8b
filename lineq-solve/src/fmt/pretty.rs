/// Cosmetic cleanup of a displayed expression: removes explicit multiplication marks, collapses
/// `+-` and `+ -` into `-`, and collapses `- -` into `+`.
///
/// This only changes how an expression looks. It is applied to the expressions of the first two
/// steps, never to the raw numbers of the later ones.
pub fn pretty(expr: &str) -> String {
    expr.replace('*', "")
        .replace("+-", "-")
        .replace("+ -", "-")
        .replace("- -", "+")
}
