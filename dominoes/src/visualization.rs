use crate::Tile;

/// Draws a chain of tiles as a row of Unicode domino characters, with the
/// open values printed at both ends.
///
/// ```
/// # use dominoes::{tile, visualize_chain, Board};
/// let mut board = Board::new(tile!("<2:2>"));
/// board.insert_right(tile!("<2:6>"));
/// assert_eq!(visualize_chain(board.iter()), "2 ╢🁁 🁅╟ 6");
/// ```
pub fn visualize_chain<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> String {
    let tiles: Vec<&Tile> = tiles.into_iter().collect();
    let (Some(first), Some(last)) = (tiles.first(), tiles.last()) else {
        return String::new();
    };
    let chars: Vec<String> = tiles.iter().map(|tile| tile.unicode_char().to_string()).collect();
    format!("{} ╢{}╟ {}", first.left(), chars.join(" "), last.right())
}
