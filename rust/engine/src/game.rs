/// Seating order around the table: who deals and who acts after whom.
///
/// Players keep their seat index for the whole session; rotation is modular
/// arithmetic over those indices rather than reordering a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    seats: usize,
    dealer: usize,
}

impl TurnOrder {
    /// The first seat deals first.
    pub fn new(seats: usize) -> Self {
        Self { seats, dealer: 0 }
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Seat that acts after `seat`.
    pub fn next(&self, seat: usize) -> usize {
        (seat + 1) % self.seats
    }

    /// Passes the deal to the seat after the current dealer.
    pub fn rotate_dealer(&mut self) {
        self.dealer = self.next(self.dealer);
    }

    /// Every seat once, starting with the dealer.
    pub fn from_dealer(&self) -> impl Iterator<Item = usize> {
        let (seats, dealer) = (self.seats, self.dealer);
        (0..seats).map(move |i| (dealer + i) % seats)
    }
}
