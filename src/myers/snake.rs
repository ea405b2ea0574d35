use super::diagonal::DiagonalArray;
use super::types::Snake;
use tracing::trace;

/// Finds a middle snake of the edit graph between `old` and `new`.
///
/// Runs a greedy search from the top-left and one from the bottom-right,
/// alternating half-steps, until the two fronts overlap on a diagonal. The
/// backward search indexes both sequences from their ends and keeps its own
/// `k` sign, so its diagonal `k` faces the forward diagonal `delta - k`.
///
/// Uses `O(N + M)` space: each call owns its two diagonal arrays.
///
/// # Examples
///
/// ```
/// use middlesnake::myers::find_middle_snake;
///
/// let old: Vec<char> = "ABCABBA".chars().collect();
/// let new: Vec<char> = "CBABAC".chars().collect();
/// let snake = find_middle_snake(&old, &new, &mut |a: &char, b: &char| a == b);
/// assert_eq!(snake.distance, 5);
/// ```
pub fn find_middle_snake<T, U, F>(old: &[T], new: &[U], eq: &mut F) -> Snake
where
    F: FnMut(&T, &U) -> bool,
{
    let rounds = (old.len() + new.len()).div_ceil(2);
    match find_middle_snake_within(old, new, eq, rounds) {
        Some(snake) => snake,
        None => unreachable!(
            "middle snake search did not converge on a {}x{} edit graph",
            old.len(),
            new.len()
        ),
    }
}

/// Same search, stopped after `rounds + 1` values of `D`.
///
/// Returns `None` when the fronts have not met by then, meaning the edit
/// distance is larger than `2 * rounds`.
pub(crate) fn find_middle_snake_within<T, U, F>(
    old: &[T],
    new: &[U],
    eq: &mut F,
    rounds: usize,
) -> Option<Snake>
where
    F: FnMut(&T, &U) -> bool,
{
    let n = old.len() as isize;
    let m = new.len() as isize;
    let delta = n - m;
    let odd = delta % 2 != 0;
    let max = old.len() + new.len();

    // k +/- 1 is read one past the last diagonal of the final round
    let mut vf = DiagonalArray::new(max + 1);
    let mut vb = DiagonalArray::new(max + 1);
    vf.set(1, 0);
    vb.set(1, 0);

    let rounds = rounds.min(max.div_ceil(2)) as isize;
    for d in 0..=rounds {
        for k in (-d..=d).step_by(2) {
            let (x0, y0, x, y) = slide(&vf, k, d, |x, y| {
                x < n && y < m && eq(&old[x as usize], &new[y as usize])
            });
            vf.set(k, x);

            let kb = delta - k;
            if odd && (-(d - 1)..=d - 1).contains(&kb) && x + vb.get(kb) >= n {
                let snake = Snake {
                    distance: (2 * d - 1) as usize,
                    x: x0 as usize,
                    y: y0 as usize,
                    u: x as usize,
                    v: y as usize,
                };
                trace!(n, m, ?snake, "forward overlap");
                return Some(snake);
            }
        }

        for k in (-d..=d).step_by(2) {
            let (x0, y0, x, y) = slide(&vb, k, d, |x, y| {
                x < n && y < m && eq(&old[(n - x - 1) as usize], &new[(m - y - 1) as usize])
            });
            vb.set(k, x);

            let kf = delta - k;
            if !odd && (-d..=d).contains(&kf) && x + vf.get(kf) >= n {
                let snake = Snake {
                    distance: (2 * d) as usize,
                    x: (n - x) as usize,
                    y: (m - y) as usize,
                    u: (n - x0) as usize,
                    v: (m - y0) as usize,
                };
                trace!(n, m, ?snake, "backward overlap");
                return Some(snake);
            }
        }
    }
    None
}

/// Extends the best `(D-1)`-path onto diagonal `k`, then follows matches.
///
/// Returns the point before the snake and the point after it.
fn slide(
    v: &DiagonalArray,
    k: isize,
    d: isize,
    mut matches: impl FnMut(isize, isize) -> bool,
) -> (isize, isize, isize, isize) {
    let mut x = if k == -d || (k != d && v.get(k - 1) < v.get(k + 1)) {
        v.get(k + 1)
    } else {
        v.get(k - 1) + 1
    };
    let mut y = x - k;
    let (x0, y0) = (x, y);
    while matches(x, y) {
        x += 1;
        y += 1;
    }
    (x0, y0, x, y)
}
