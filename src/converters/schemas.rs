// Destination table layouts for each vendor application
//
// Column names and order must match what each vendor's programming
// software expects on import.

/// Baofeng DM-32 channel import, CHIRP column order
pub const DM32_CHANNELS: &[&str] = &[
    "No.",
    "Channel Name",
    "Channel Type",
    "RX Frequency[MHz]",
    "TX Frequency[MHz]",
    "Power",
    "Band Width",
    "Scan List",
    "TX Admit",
    "Emergency System",
    "Squelch Level",
    "APRS Report Type",
    "Forbid TX",
    "APRS Receive",
    "Forbid Talkaround",
    "Auto Scan",
    "Lone Work",
    "Emergency Indicator",
    "Emergency ACK",
    "Analog APRS PTT Mode",
    "Digital APRS PTT Mode",
    "TX Contact",
    "RX Group List",
    "Color Code",
    "Time Slot",
    "Encryption",
    "Encryption ID",
    "APRS Report Channel",
    "Direct Dual Mode",
    "Private Confirm",
    "Short Data Confirm",
    "DMR ID",
    "CTC/DCS Decode",
    "CTC/DCS Encode",
    "Scramble",
    "RX Squelch Mode",
    "Signaling Type",
    "PTT ID",
    "VOX Function",
    "PTT ID Display",
];

/// DM-32 channel import as the GD-88 tooling lays it out (Encode before Decode)
pub const GD88_DM32_CHANNELS: &[&str] = &[
    "No.",
    "Channel Name",
    "Channel Type",
    "RX Frequency[MHz]",
    "TX Frequency[MHz]",
    "Power",
    "Band Width",
    "Scan List",
    "TX Admit",
    "Emergency System",
    "Squelch Level",
    "APRS Report Type",
    "Forbid TX",
    "APRS Receive",
    "Forbid Talkaround",
    "Auto Scan",
    "Lone Work",
    "Emergency Indicator",
    "Emergency ACK",
    "Analog APRS PTT Mode",
    "Digital APRS PTT Mode",
    "TX Contact",
    "RX Group List",
    "Color Code",
    "Time Slot",
    "Encryption",
    "Encryption ID",
    "APRS Report Channel",
    "Direct Dual Mode",
    "Private Confirm",
    "Short Data Confirm",
    "DMR ID",
    "CTC/DCS Encode",
    "CTC/DCS Decode",
    "Scramble",
    "RX Squelch Mode",
    "Signaling Type",
    "PTT ID",
    "VOX Function",
    "PTT ID Display",
];

/// Retevis RT3/RT3S channel import
pub const RT3_CHANNELS: &[&str] = &[
    "Channel Mode",
    "Channel Name",
    "RX Frequency(MHz)",
    "TX Frequency(MHz)",
    "Band Width",
    "Scan List",
    "Squelch",
    "RX Ref Frequency",
    "TX Ref Frequency",
    "TOT[s]",
    "TOT Rekey Delay[s]",
    "Power",
    "Admit Criteria",
    "Auto Scan",
    "Rx Only",
    "Lone Worker",
    "VOX",
    "Allow Talkaround",
    "Send GPS Info",
    "Receive GPS Info",
    "Private Call Confirmed",
    "Emergency Alarm Ack",
    "Data Call Confirmed",
    "Allow Interrupt",
    "DCDM Switch",
    "Leader/MS",
    "Emergency System",
    "Contact Name",
    "Group List",
    "Color Code",
    "Repeater Slot",
    "In Call Criteria",
    "Privacy",
    "Privacy No.",
    "GPS System",
    "CTCSS/DCS Dec",
    "CTCSS/DCS Enc",
    "Rx Signaling System",
    "Tx Signaling System",
    "QT Reverse",
    "Non-QT/DQT Turn-off Freq",
    "Display PTT ID",
    "Reverse Burst/Turn-off Code",
    "Decode 1",
    "Decode 2",
    "Decode 3",
    "Decode 4",
    "Decode 5",
    "Decode 6",
    "Decode 7",
    "Decode 8",
];

/// Retevis RT3/RT3S digital contact import
pub const RT3_CONTACTS: &[&str] = &["Contact Name", "Call Type", "Call ID", "Call Receive Tone"];

/// BTECH UV-Pro channel import
pub const UVPRO_CHANNELS: &[&str] = &[
    "title",
    "tx_freq",
    "rx_freq",
    "tx_sub_audio(CTCSS=freq/DCS=number)",
    "rx_sub_audio(CTCSS=freq/DCS=number)",
    "tx_power(H/M/L)",
    "bandwidth(12500/25000)",
    "scan(0=OFF/1=ON)",
    "talk around(0=OFF/1=ON)",
    "pre_de_emph_bypass(0=OFF/1=ON)",
    "sign(0=OFF/1=ON)",
    "tx_dis(0=OFF/1=ON)",
    "mute(0=OFF/1=ON)",
    "rx_modulation(0=FM/1=AM)",
    "tx_modulation(0=FM/1=AM)",
];

/// Maximum name length in DMR channel/contact columns
pub const MAX_NAME_LEN: usize = 16;
