//! Aggregate statistics over the completed-ticket archive.

use crate::store::TicketMap;
use rackcheck_ticket::{YesNo, keys, rack_key};
use serde::Serialize;
use std::collections::BTreeMap;

/// Sim/Não counts for one rack attribute across every rack of every
/// ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct YesNoTally {
    pub sim: u32,
    pub nao: u32,
}

impl YesNoTally {
    fn observe(&mut self, answer: YesNo) {
        match answer {
            YesNo::Sim => self.sim += 1,
            YesNo::Nao => self.nao += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.sim + self.nao
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RackStatusTallies {
    pub bom_estado: YesNoTally,
    pub organizado: YesNoTally,
    pub identificado: YesNoTally,
}

/// The aggregate view offered on the review side: volume, geography, and
/// rack condition.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChecklistStats {
    pub total_tickets: usize,
    pub total_racks: u64,
    /// Ticket counts per Cidade/UF; tickets without a location are left
    /// out.
    pub tickets_by_location: BTreeMap<String, usize>,
    pub rack_status: RackStatusTallies,
}

impl ChecklistStats {
    pub fn from_tickets(tickets: &TicketMap) -> Self {
        let mut stats = ChecklistStats { total_tickets: tickets.len(), ..Default::default() };

        for record in tickets.values() {
            let num_racks = record.num_racks();
            stats.total_racks += num_racks as u64;

            let location = record.text(keys::CIDADE_UF);
            if !location.is_empty() {
                *stats.tickets_by_location.entry(location.into_owned()).or_default() += 1;
            }

            for i in 1..=num_racks {
                stats
                    .rack_status
                    .bom_estado
                    .observe(record.yes_no(&rack_key(keys::RACK_ESTADO, i)));
                stats
                    .rack_status
                    .organizado
                    .observe(record.yes_no(&rack_key(keys::RACK_ORGANIZADO, i)));
                stats
                    .rack_status
                    .identificado
                    .observe(record.yes_no(&rack_key(keys::RACK_IDENTIFICADO, i)));
            }
        }
        stats
    }

    pub fn mean_racks_per_ticket(&self) -> f64 {
        if self.total_tickets == 0 {
            0.0
        } else {
            self.total_racks as f64 / self.total_tickets as f64
        }
    }
}
