//! Menu choices and their labels.

use crate::labels;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewCart,
    AddItem,
    UpdateQuantity,
    RemoveItem,
    SetDiscount,
    SetTax,
    Checkout,
    ClearCart,
    Exit,
}

impl MenuChoice {
    /// Menu order as displayed.
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::ViewCart,
        MenuChoice::AddItem,
        MenuChoice::UpdateQuantity,
        MenuChoice::RemoveItem,
        MenuChoice::SetDiscount,
        MenuChoice::SetTax,
        MenuChoice::Checkout,
        MenuChoice::ClearCart,
        MenuChoice::Exit,
    ];

    /// Maps the typed choice (`"0"`–`"8"`) to a menu entry.
    ///
    /// Anything else, including `"01"` or `"1 2"`, is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::ViewCart,
            "2" => MenuChoice::AddItem,
            "3" => MenuChoice::UpdateQuantity,
            "4" => MenuChoice::RemoveItem,
            "5" => MenuChoice::SetDiscount,
            "6" => MenuChoice::SetTax,
            "7" => MenuChoice::Checkout,
            "8" => MenuChoice::ClearCart,
            "0" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewCart => labels::MENU_VIEW,
            MenuChoice::AddItem => labels::MENU_ADD,
            MenuChoice::UpdateQuantity => labels::MENU_UPDATE,
            MenuChoice::RemoveItem => labels::MENU_REMOVE,
            MenuChoice::SetDiscount => labels::MENU_DISCOUNT,
            MenuChoice::SetTax => labels::MENU_TAX,
            MenuChoice::Checkout => labels::MENU_CHECKOUT,
            MenuChoice::ClearCart => labels::MENU_CLEAR,
            MenuChoice::Exit => labels::MENU_EXIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_choice() {
        for (digit, expected) in ["1", "2", "3", "4", "5", "6", "7", "8", "0"]
            .iter()
            .zip(MenuChoice::ALL)
        {
            assert_eq!(MenuChoice::parse(digit), Some(expected));
        }
    }

    #[test]
    fn test_parse_rejects_others() {
        for input in ["", "9", "01", "x", "1 2", "-1"] {
            assert_eq!(MenuChoice::parse(input), None, "{input:?}");
        }
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Checkout));
    }

    #[test]
    fn test_labels_start_with_their_digit() {
        for choice in MenuChoice::ALL {
            let digit = &choice.label()[..1];
            assert_eq!(MenuChoice::parse(digit), Some(choice));
        }
    }
}
