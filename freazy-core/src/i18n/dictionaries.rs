use super::{DemoValues, DocumentTitles, LabelSet, StatsLabels, StatusLabels, Tooltips};

pub(super) static FR: LabelSet = LabelSet {
    titles: DocumentTitles {
        invoice: "Facture",
        quote: "Devis",
        proforma: "Facture Pro-forma",
        credit_note: "Avoir (Note de Crédit)",
        receipt: "Reçu",
    },
    date: "Date",
    due_date: "Date d'échéance",
    billed_to: "Facturé à",
    number: "N°",
    description: "DESCRIPTION",
    qty: "QTÉ",
    unit_price: "PRIX UNIT.",
    line_total: "Total TTC",
    subtotal: "Total HT",
    vat: "TVA",
    total: "Total TTC",
    total_due: "TOTAL À PAYER",
    quote_validity: "Validité du devis",
    quote_billed_to: "Adressé à",
    quote_total: "Total du devis",
    received_from: "Reçu de",
    payment_date: "Date de paiement",
    amount_paid: "Montant réglé",
    credit_note_number: "Avoir N°",
    credit_amount: "Montant de l'avoir",
    payment_info: "Informations de paiement",
    legal_mentions: "Mentions légales",
    footer: "Généré gratuitement avec Freazy",
    signature: "Signature :",
    phone: "Téléphone",
    vat_number: "N° TVA Intracommunautaire",
    delivery_address: "Adresse de livraison",
    no_discount: "Pas d'escompte pour paiement anticipé.",
    vat_not_applicable: "TVA non applicable, art. 293 B du CGI",
    retention_reminder: "Rappel : Pensez à conserver vos factures pendant 10 ans.",
    down_payment_invoice: "Facture d'acompte",
    default_issuer_name: "Mon Entreprise",
    default_item_description: "Prestation",
    demo: DemoValues {
        issuer_name: "Mon Entreprise",
        issuer_address: "123 Rue de la Paix, 75000 Paris",
        issuer_tax_id: "123 456 789 00012",
        issuer_email: "contact@monentreprise.com",
        issuer_phone: "01 23 45 67 89",
        client_name: "Client VIP",
        client_address: "456 Avenue des Champs-Élysées, 75008 Paris",
        client_email: "client@vip.com",
        payment_info: "IBAN: FR76 1234 5678 9101 1121 3\nBIC: PARIFR76",
        legal_mentions: "Pénalités de retard : 3 fois le taux d'intérêt légal.\nIndemnité forfaitaire pour frais de recouvrement : 40€.",
    },
    status: StatusLabels {
        draft: "Brouillon",
        sent: "Envoyée",
        paid: "Payée",
        late: "En retard",
    },
    stats: StatsLabels {
        revenue: "Chiffre d'affaires",
        pending: "En attente",
    },
    tooltips: Tooltips {
        invoice_number: "Numéro unique obligatoire pour identifier votre document",
        date: "Date d'émission du document",
        issuer_name: "Votre raison sociale ou nom complet",
        issuer_tax_id: "Numéro SIRET à 14 chiffres obligatoire pour les professionnels français",
        client_name: "Nom complet du client ou raison sociale de l'entreprise",
    },
};

pub(super) static EN: LabelSet = LabelSet {
    titles: DocumentTitles {
        invoice: "Invoice",
        quote: "Quote",
        proforma: "Pro-forma Invoice",
        credit_note: "Credit Note",
        receipt: "Receipt",
    },
    date: "Date",
    due_date: "Due Date",
    billed_to: "Billed to",
    number: "No",
    description: "DESCRIPTION",
    qty: "QTY",
    unit_price: "UNIT PRICE",
    line_total: "Total Due",
    subtotal: "Subtotal",
    vat: "VAT",
    total: "Total Due",
    total_due: "TOTAL DUE",
    quote_validity: "Valid until",
    quote_billed_to: "To",
    quote_total: "Quote Total",
    received_from: "Received from",
    payment_date: "Payment Date",
    amount_paid: "Amount Paid",
    credit_note_number: "Credit Note No",
    credit_amount: "Credit Amount",
    payment_info: "Payment Info",
    legal_mentions: "Legal Mentions",
    footer: "Generated for free with Freazy",
    signature: "Signature:",
    phone: "Phone",
    vat_number: "VAT Number",
    delivery_address: "Delivery Address",
    no_discount: "No discount for early payment.",
    vat_not_applicable: "VAT not applicable, art. 293 B of the CGI",
    retention_reminder: "Reminder: Remember to keep your invoices for 10 years.",
    down_payment_invoice: "Down Payment Invoice",
    default_issuer_name: "My Company",
    default_item_description: "Service",
    demo: DemoValues {
        issuer_name: "My Company",
        issuer_address: "123 Peace Street, London W1A 1AA",
        issuer_tax_id: "GB123456789",
        issuer_email: "contact@mycompany.com",
        issuer_phone: "+1 234 567 890",
        client_name: "VIP Client",
        client_address: "456 Main Avenue, London SW1A 1AA",
        client_email: "client@vip.com",
        payment_info: "IBAN: GB76 1234 5678 9101 1121 3\nBIC: BANKGB76",
        legal_mentions: "Late payment penalties: 3 times the legal interest rate.\nFlat-rate recovery fee: £40.",
    },
    status: StatusLabels {
        draft: "Draft",
        sent: "Sent",
        paid: "Paid",
        late: "Late",
    },
    stats: StatsLabels {
        revenue: "Revenue",
        pending: "Pending",
    },
    tooltips: Tooltips {
        invoice_number: "Unique number required to identify your document",
        date: "Document issue date",
        issuer_name: "Your company name or full name",
        issuer_tax_id: "Tax ID or registration number (required for businesses)",
        client_name: "Client full name or company name",
    },
};

pub(super) static ES: LabelSet = LabelSet {
    titles: DocumentTitles {
        invoice: "Factura",
        quote: "Presupuesto",
        proforma: "Factura Proforma",
        credit_note: "Factura de Abono",
        receipt: "Recibo",
    },
    date: "Fecha",
    due_date: "Fecha de vencimiento",
    billed_to: "Facturado a",
    number: "Nº",
    description: "DESCRIPCIÓN",
    qty: "CANT.",
    unit_price: "PRECIO UNIT.",
    line_total: "Total a Pagar",
    subtotal: "Base Imponible",
    vat: "IVA",
    total: "Total a Pagar",
    total_due: "TOTAL A PAGAR",
    quote_validity: "Válido hasta",
    quote_billed_to: "Dirigido a",
    quote_total: "Total del presupuesto",
    received_from: "Recibido de",
    payment_date: "Fecha de pago",
    amount_paid: "Importe pagado",
    credit_note_number: "Abono Nº",
    credit_amount: "Importe del abono",
    payment_info: "Información de pago",
    legal_mentions: "Menciones legales",
    footer: "Generado gratis con Freazy",
    signature: "Firma:",
    phone: "Teléfono",
    vat_number: "Nº IVA Intracomunitario",
    delivery_address: "Dirección de entrega",
    no_discount: "Sin descuento por pago anticipado.",
    vat_not_applicable: "IVA no aplicable, art. 293 B del CGI",
    retention_reminder: "Recordatorio: Recuerde conservar sus facturas durante 10 años.",
    down_payment_invoice: "Factura de anticipo",
    default_issuer_name: "Mi Empresa",
    default_item_description: "Servicio",
    demo: DemoValues {
        issuer_name: "Mi Empresa",
        issuer_address: "Calle de la Paz 123, 28001 Madrid",
        issuer_tax_id: "B12345678",
        issuer_email: "contacto@miempresa.com",
        issuer_phone: "+34 912 345 678",
        client_name: "Cliente VIP",
        client_address: "Avenida Principal 456, 28002 Madrid",
        client_email: "cliente@vip.com",
        payment_info: "IBAN: ES76 1234 5678 9101 1121 3\nBIC: BANKES76",
        legal_mentions: "Penalizaciones por retraso: 3 veces la tasa de interés legal.\nIndemnización forfaitaria por gastos de cobro: 40€.",
    },
    status: StatusLabels {
        draft: "Borrador",
        sent: "Enviada",
        paid: "Pagada",
        late: "Vencida",
    },
    stats: StatsLabels {
        revenue: "Ingresos",
        pending: "Pendiente",
    },
    tooltips: Tooltips {
        invoice_number: "Número único requerido para identificar su documento",
        date: "Fecha de emisión del documento",
        issuer_name: "Nombre de su empresa o nombre completo",
        issuer_tax_id: "NIF o número de registro (obligatorio para empresas)",
        client_name: "Nombre completo del cliente o razón social",
    },
};

pub(super) static IT: LabelSet = LabelSet {
    titles: DocumentTitles {
        invoice: "Fattura",
        quote: "Preventivo",
        proforma: "Fattura Proforma",
        credit_note: "Nota di Credito",
        receipt: "Ricevuta",
    },
    date: "Data",
    due_date: "Scadenza",
    billed_to: "Fatturato a",
    number: "N.",
    description: "DESCRIZIONE",
    qty: "Q.TÀ",
    unit_price: "PREZZO UNIT.",
    line_total: "Totale",
    subtotal: "Imponibile",
    vat: "IVA",
    total: "Totale",
    total_due: "TOTALE DA PAGARE",
    quote_validity: "Valido fino al",
    quote_billed_to: "Intestato a",
    quote_total: "Totale preventivo",
    received_from: "Ricevuto da",
    payment_date: "Data di pagamento",
    amount_paid: "Importo pagato",
    credit_note_number: "Nota di credito N.",
    credit_amount: "Importo nota di credito",
    payment_info: "Dati di pagamento",
    legal_mentions: "Note legali",
    footer: "Generato gratuitamente con Freazy",
    signature: "Firma:",
    phone: "Telefono",
    vat_number: "Partita IVA",
    delivery_address: "Indirizzo di consegna",
    no_discount: "Nessuno sconto per pagamento anticipato.",
    vat_not_applicable: "IVA non applicabile, art. 293 B del CGI",
    retention_reminder: "Promemoria: Ricorda di conservare le fatture per 10 anni.",
    down_payment_invoice: "Fattura di acconto",
    default_issuer_name: "La mia azienda",
    default_item_description: "Servizio",
    demo: DemoValues {
        issuer_name: "La Mia Azienda",
        issuer_address: "Via della Pace 123, 00100 Roma",
        issuer_tax_id: "12345678901",
        issuer_email: "contatto@miaazienda.it",
        issuer_phone: "+39 06 1234 5678",
        client_name: "Cliente VIP",
        client_address: "Viale Principale 456, 00100 Roma",
        client_email: "cliente@vip.it",
        payment_info: "IBAN: IT76 1234 5678 9101 1121 3\nBIC: BANKIT76",
        legal_mentions: "Penalità per ritardo: 3 volte il tasso di interesse legale.\nIndennità forfettaria per spese di recupero: 40€.",
    },
    status: StatusLabels {
        draft: "Bozza",
        sent: "Inviata",
        paid: "Pagata",
        late: "In ritardo",
    },
    stats: StatsLabels {
        revenue: "Fatturato",
        pending: "In attesa",
    },
    tooltips: Tooltips {
        invoice_number: "Numero univoco richiesto per identificare il documento",
        date: "Data di emissione del documento",
        issuer_name: "Nome della tua azienda o nome completo",
        issuer_tax_id: "Partita IVA o numero di registrazione (obbligatorio per le imprese)",
        client_name: "Nome completo del cliente o ragione sociale",
    },
};

pub(super) static DE: LabelSet = LabelSet {
    titles: DocumentTitles {
        invoice: "Rechnung",
        quote: "Angebot",
        proforma: "Proforma-Rechnung",
        credit_note: "Gutschrift",
        receipt: "Zahlungsbeleg",
    },
    date: "Datum",
    due_date: "Fälligkeitsdatum",
    billed_to: "Rechnungsadresse",
    number: "Nr.",
    description: "BESCHREIBUNG",
    qty: "MENGE",
    unit_price: "EINZELPREIS",
    line_total: "Gesamtbetrag",
    subtotal: "Nettobetrag",
    vat: "MwSt.",
    total: "Gesamtbetrag",
    total_due: "GESAMTBETRAG",
    quote_validity: "Gültig bis",
    quote_billed_to: "Empfänger",
    quote_total: "Gesamtbetrag",
    received_from: "Erhalten von",
    payment_date: "Zahlungsdatum",
    amount_paid: "Gezahlter Betrag",
    credit_note_number: "Gutschrift Nr.",
    credit_amount: "Gutschriftsbetrag",
    payment_info: "Zahlungsinformationen",
    legal_mentions: "Rechtliche Hinweise",
    footer: "Kostenlos erstellt mit Freazy",
    signature: "Unterschrift:",
    phone: "Telefon",
    vat_number: "USt-IdNr.",
    delivery_address: "Lieferadresse",
    no_discount: "Kein Skonto bei vorzeitiger Zahlung.",
    vat_not_applicable: "USt. nicht anwendbar, Art. 293 B des CGI",
    retention_reminder: "Erinnerung: Denken Sie daran, Ihre Rechnungen 10 Jahre lang aufzubewahren.",
    down_payment_invoice: "Anzahlungsrechnung",
    default_issuer_name: "Mein Unternehmen",
    default_item_description: "Dienstleistung",
    demo: DemoValues {
        issuer_name: "Mein Unternehmen",
        issuer_address: "Friedensstraße 123, 10115 Berlin",
        issuer_tax_id: "DE123456789",
        issuer_email: "kontakt@meinefirma.de",
        issuer_phone: "+49 30 12345678",
        client_name: "VIP Kunde",
        client_address: "Hauptallee 456, 10115 Berlin",
        client_email: "kunde@vip.de",
        payment_info: "IBAN: DE76 1234 5678 9101 1121 3\nBIC: BANKDE76",
        legal_mentions: "Verzugszinsen: 3-facher gesetzlicher Zinssatz.\nPauschale Mahngebühr: 40€.",
    },
    status: StatusLabels {
        draft: "Entwurf",
        sent: "Gesendet",
        paid: "Bezahlt",
        late: "Überfällig",
    },
    stats: StatsLabels {
        revenue: "Umsatz (Monat)",
        pending: "Ausstehend",
    },
    tooltips: Tooltips {
        invoice_number: "Eindeutige Nummer zur Identifizierung Ihres Dokuments erforderlich",
        date: "Ausstellungsdatum des Dokuments",
        issuer_name: "Ihr Firmenname oder vollständiger Name",
        issuer_tax_id: "Steuernummer oder Registrierungsnummer (erforderlich für Unternehmen)",
        client_name: "Vollständiger Name des Kunden oder Firmenname",
    },
};

pub(super) static PT: LabelSet = LabelSet {
    titles: DocumentTitles {
        invoice: "Fatura",
        quote: "Orçamento",
        proforma: "Fatura Pró-forma",
        credit_note: "Nota de Crédito",
        receipt: "Recibo",
    },
    date: "Data",
    due_date: "Data de vencimento",
    billed_to: "Faturado a",
    number: "Nº",
    description: "DESCRIÇÃO",
    qty: "QTD",
    unit_price: "PREÇO UNIT.",
    line_total: "Total a Pagar",
    subtotal: "Subtotal",
    vat: "IVA",
    total: "Total a Pagar",
    total_due: "TOTAL A PAGAR",
    quote_validity: "Válido até",
    quote_billed_to: "Exmo.(s) Sr.(s)",
    quote_total: "Total do orçamento",
    received_from: "Recebido de",
    payment_date: "Data de pagamento",
    amount_paid: "Valor pago",
    credit_note_number: "Nota de crédito Nº",
    credit_amount: "Valor da nota de crédito",
    payment_info: "Informações de pagamento",
    legal_mentions: "Menções legais",
    footer: "Gerado gratuitamente com Freazy",
    signature: "Assinatura:",
    phone: "Telefone",
    vat_number: "NIF / IVA",
    delivery_address: "Endereço de entrega",
    no_discount: "Sem desconto para pagamento antecipado.",
    vat_not_applicable: "IVA não aplicável, art. 293 B do CGI",
    retention_reminder: "Lembrete: Lembre-se de guardar as suas faturas durante 10 anos.",
    down_payment_invoice: "Fatura de adiantamento",
    default_issuer_name: "Minha Empresa",
    default_item_description: "Serviço",
    demo: DemoValues {
        issuer_name: "Minha Empresa",
        issuer_address: "Rua da Paz 123, 1000-001 Lisboa",
        issuer_tax_id: "PT123456789",
        issuer_email: "contacto@minhaempresa.pt",
        issuer_phone: "+351 21 123 4567",
        client_name: "Cliente VIP",
        client_address: "Avenida Principal 456, 1000-002 Lisboa",
        client_email: "cliente@vip.pt",
        payment_info: "IBAN: PT76 1234 5678 9101 1121 3\nBIC: BANKPT76",
        legal_mentions: "Penalidades por atraso: 3 vezes a taxa de juro legal.\nIndemnização forfetária por despesas de cobrança: 40€.",
    },
    status: StatusLabels {
        draft: "Rascunho",
        sent: "Enviada",
        paid: "Paga",
        late: "Em atraso",
    },
    stats: StatsLabels {
        revenue: "Faturamento (Mês)",
        pending: "Pendente",
    },
    tooltips: Tooltips {
        invoice_number: "Número único necessário para identificar o seu documento",
        date: "Data de emissão do documento",
        issuer_name: "Nome da sua empresa ou nome completo",
        issuer_tax_id: "NIF ou número de registo (obrigatório para empresas)",
        client_name: "Nome completo do cliente ou razão social",
    },
};
